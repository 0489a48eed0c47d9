//! Main Leptos application component and routing.

use crate::components::Toaster;
use crate::guard::RouteGuard;
use crate::pages::{AuthPage, HomePage, NotFound};
use crate::session::{AuthProvider, use_auth};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use readybag_session::AUTH_ENTRY_PATH;

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ReadyBag"/>
        <Router>
            <AuthProvider>
                <Header/>
                <main class="container">
                    <Routes fallback=NotFound>
                        <Route
                            path=path!("/")
                            view=|| view! { <RouteGuard path="/"><HomePage/></RouteGuard> }
                        />
                        <Route path=path!("/auth") view=AuthPage/>
                    </Routes>
                </main>
                <Toaster/>
            </AuthProvider>
        </Router>
    }
}

/// Header component with the account link or sign-out button.
#[component]
fn Header() -> impl IntoView {
    let auth = use_auth();

    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"ReadyBag"</a>
            </div>
            <div class="header-right">
                {move || {
                    if auth.state().is_loading() {
                        return view! { <span class="user-name">"…"</span> }.into_any();
                    }
                    match auth.user() {
                        Some(user) => view! {
                            <div class="user-menu">
                                <span class="user-name">{user.display_name().to_string()}</span>
                                <button
                                    type="button"
                                    class="link-button"
                                    disabled=move || auth.is_pending()
                                    on:click=move |_| auth.logout()
                                >
                                    "Sign out"
                                </button>
                            </div>
                        }.into_any(),
                        None => view! {
                            <a href=AUTH_ENTRY_PATH class="login-button">"Sign in"</a>
                        }.into_any(),
                    }
                }}
            </div>
        </header>
    }
}
