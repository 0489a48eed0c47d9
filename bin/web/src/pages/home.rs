//! Landing page: exchange tabs, guest notice, greeting.

use crate::components::{CustomTabs, ExchangeFilterTabs, NonMemberInfo};
use crate::session::use_auth;
use leptos::prelude::*;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="home-page">
            {move || match auth.user() {
                Some(user) => view! {
                    <h1>{format!("Welcome back, {}!", user.display_name())}</h1>
                    <p>"Your saved products and travel dates are synced to your account."</p>
                    <CustomTabs/>
                }.into_any(),
                None => view! {
                    <h1>"ReadyBag"</h1>
                    <p>"Shop smarter abroad with live exchange rates."</p>
                    <NonMemberInfo/>
                    <ExchangeFilterTabs/>
                }.into_any(),
            }}
        </div>
    }
}
