//! Sign-in, sign-up and password reset.

use crate::session::{AuthContext, use_auth};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_query_map;
use readybag_session::{
    ForgotPasswordForm, LoginForm, MIN_PASSWORD_LEN, NewPasswordForm, RegisterForm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
    Forgot,
}

/// The auth page component.
///
/// Signed-in visitors are sent home. A `?token=` query shows the
/// new-password form from an emailed reset link.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    let (tab, set_tab) = signal(AuthTab::Login);

    let tab_button = move |target: AuthTab, label: &'static str| {
        view! {
            <button
                type="button"
                class="tab"
                class:active=move || tab.get() == target
                on:click=move |_| set_tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            {move || auth.user().is_some().then(|| view! { <Redirect path="/"/> })}
            {move || match query.with(|q| q.get("token")) {
                Some(token) => view! { <NewPasswordPanel auth=auth token=token/> }.into_any(),
                None => view! {
                    <div class="auth-box">
                        <div class="tabs-grid">
                            {tab_button(AuthTab::Login, "Sign in")}
                            {tab_button(AuthTab::Register, "Sign up")}
                        </div>
                        {move || match tab.get() {
                            AuthTab::Login => view! {
                                <LoginPanel auth=auth on_forgot=move || set_tab.set(AuthTab::Forgot)/>
                            }.into_any(),
                            AuthTab::Register => view! { <RegisterPanel auth=auth/> }.into_any(),
                            AuthTab::Forgot => view! {
                                <ForgotPanel auth=auth on_back=move || set_tab.set(AuthTab::Login)/>
                            }.into_any(),
                        }}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

fn field_error(error: ReadSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })
}

#[component]
fn LoginPanel(auth: AuthContext, on_forgot: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };
        match form.validate() {
            Ok(input) => {
                set_error.set(None);
                auth.login(input);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label for="login-email">"Email"</label>
            <input
                id="login-email"
                type="email"
                autocomplete="email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <label for="login-password">"Password"</label>
            <input
                id="login-password"
                type="password"
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            {field_error(error)}
            <button type="submit" class="primary-btn" disabled=move || auth.is_pending()>
                {move || if auth.is_pending() { "Signing in..." } else { "Sign in" }}
            </button>
            <button type="button" class="link-button" on:click=move |_| on_forgot()>
                "Forgot your password?"
            </button>
        </form>
    }
}

#[component]
fn RegisterPanel(auth: AuthContext) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (nickname, set_nickname) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
            nickname: nickname.get(),
        };
        match form.validate() {
            Ok(input) => {
                set_error.set(None);
                auth.register(input);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label for="register-email">"Email"</label>
            <input
                id="register-email"
                type="email"
                autocomplete="email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <label for="register-nickname">"Nickname (optional)"</label>
            <input
                id="register-nickname"
                type="text"
                autocomplete="nickname"
                prop:value=move || nickname.get()
                on:input=move |ev| set_nickname.set(event_target_value(&ev))
            />
            <label for="register-password">"Password"</label>
            <input
                id="register-password"
                type="password"
                autocomplete="new-password"
                placeholder=format!("At least {MIN_PASSWORD_LEN} characters")
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <label for="register-confirm">"Confirm password"</label>
            <input
                id="register-confirm"
                type="password"
                autocomplete="new-password"
                prop:value=move || confirm.get()
                on:input=move |ev| set_confirm.set(event_target_value(&ev))
            />
            {field_error(error)}
            <button type="submit" class="primary-btn" disabled=move || auth.is_pending()>
                {move || if auth.is_pending() { "Creating account..." } else { "Create account" }}
            </button>
        </form>
    }
}

#[component]
fn ForgotPanel(auth: AuthContext, on_back: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ForgotPasswordForm { email: email.get() };
        match form.validate() {
            Ok(input) => {
                set_error.set(None);
                auth.request_password_reset(input);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <p>"Enter your account email and we will send you a reset link."</p>
            <label for="forgot-email">"Email"</label>
            <input
                id="forgot-email"
                type="email"
                autocomplete="email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            {field_error(error)}
            <button type="submit" class="primary-btn" disabled=move || auth.is_pending()>
                "Send reset link"
            </button>
            <button type="button" class="link-button" on:click=move |_| on_back()>
                "Back to sign in"
            </button>
        </form>
    }
}

#[component]
fn NewPasswordPanel(auth: AuthContext, token: String) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = NewPasswordForm {
            token: token.clone(),
            password: password.get(),
            confirm_password: confirm.get(),
        };
        match form.validate() {
            Ok(input) => {
                set_error.set(None);
                auth.reset_password(input);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="auth-box">
            <h1>"Choose a new password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label for="reset-password">"New password"</label>
                <input
                    id="reset-password"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <label for="reset-confirm">"Confirm new password"</label>
                <input
                    id="reset-confirm"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
                {field_error(error)}
                <button type="submit" class="primary-btn" disabled=move || auth.is_pending()>
                    "Save password"
                </button>
            </form>
        </div>
    }
}
