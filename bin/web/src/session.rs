//! Reactive auth session shared through Leptos context.
//!
//! [`AuthProvider`] owns the signals; pages and the route guard read them
//! through [`use_auth`]. The identity check and every auth mutation run
//! in the browser only.

use crate::browser;
use leptos::prelude::*;
use leptos::task::spawn_local;
use readybag_api::{ApiError, AuthClient};
use readybag_core::Result;
use readybag_session::{
    AuthSession, AuthUser, AuthenticationState, LoginInput, RegisterInput, ResetPasswordInput,
    ResetPasswordRequestInput,
};
use std::future::Future;

/// Tone of a toast notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Destructive,
}

/// A short message shown by the toaster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            variant: NoticeVariant::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: NoticeVariant::Destructive,
        }
    }
}

/// Handle to the current auth session.
///
/// Cheap to copy; every copy reads and writes the same signals.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<AuthUser>>,
    is_loading: RwSignal<bool>,
    pending: RwSignal<bool>,
    notice: RwSignal<Option<Notice>>,
}

impl AuthContext {
    /// Creates a session in the given state.
    pub fn new(state: AuthenticationState) -> Self {
        Self {
            is_loading: RwSignal::new(state.is_loading()),
            user: RwSignal::new(state.user().cloned()),
            pending: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    /// The signed-in user, tracked.
    pub fn user(&self) -> Option<AuthUser> {
        self.user.get()
    }

    /// True while an auth mutation is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// The most recent notice, if not dismissed.
    pub fn notice(&self) -> Option<Notice> {
        self.notice.get()
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    /// Snapshot of the session, tracked.
    pub fn state(&self) -> AuthenticationState {
        if self.is_loading.get() {
            AuthenticationState::initial()
        } else {
            AuthenticationState::resolved(self.user.get())
        }
    }

    /// Re-reads the signed-in user from the backend.
    ///
    /// Leaves `is_loading` set until the first answer arrives; later
    /// refreshes keep showing the previous user meanwhile.
    pub fn refresh(self) {
        spawn_local(async move {
            self.reload_user().await;
        });
    }

    async fn reload_user(self) {
        let user = match browser::auth_client() {
            Ok(client) => client.current_user().await,
            Err(e) => {
                tracing::warn!(error = %e, "Cannot check identity without an auth client");
                None
            }
        };
        self.user.set(user);
        self.is_loading.set(false);
    }

    pub fn login(self, input: LoginInput) {
        self.mutate(
            "Sign-in failed",
            true,
            move |client| async move { client.login(&input).await },
            |_| Notice::success("Signed in", Some("Welcome to ReadyBag!".to_string())),
        );
    }

    pub fn register(self, input: RegisterInput) {
        self.mutate(
            "Sign-up failed",
            true,
            move |client| async move { client.register(&input).await },
            |_| Notice::success("Account created", Some("Welcome to ReadyBag!".to_string())),
        );
    }

    pub fn logout(self) {
        self.mutate(
            "Sign-out failed",
            true,
            |client| async move { client.logout().await },
            |()| Notice::success("Signed out", None),
        );
    }

    pub fn request_password_reset(self, input: ResetPasswordRequestInput) {
        self.mutate(
            "Reset request failed",
            false,
            move |client| async move { client.request_password_reset(&input).await },
            |_| {
                Notice::success(
                    "Reset link sent",
                    Some("Check your email for the reset link.".to_string()),
                )
            },
        );
    }

    pub fn reset_password(self, input: ResetPasswordInput) {
        self.mutate(
            "Password reset failed",
            false,
            move |client| async move { client.reset_password(&input).await },
            |_| {
                Notice::success(
                    "Password changed",
                    Some("Sign in with your new password.".to_string()),
                )
            },
        );
    }

    /// Runs one auth call in the background and publishes its outcome.
    fn mutate<T, F, Fut>(
        self,
        failure_title: &'static str,
        reload: bool,
        call: F,
        on_success: impl FnOnce(T) -> Notice + 'static,
    ) where
        T: 'static,
        F: FnOnce(AuthClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        self.pending.set(true);
        spawn_local(async move {
            let result = match browser::auth_client() {
                Ok(client) => call(client).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(value) => {
                    self.notice.set(Some(on_success(value)));
                    if reload {
                        self.reload_user().await;
                    }
                }
                Err(report) => {
                    tracing::warn!(error = %report, failure = failure_title, "Auth request failed");
                    let message = report.current_context().user_message();
                    self.notice
                        .set(Some(Notice::destructive(failure_title, message)));
                }
            }

            self.pending.set(false);
        });
    }
}

impl AuthSession for AuthContext {
    fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }
}

/// Returns the session provided by the enclosing [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Provides the auth session to its children and resolves identity.
///
/// Renders in the loading state on the server; the browser then asks the
/// backend who is signed in and clears guest storage when nobody is.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(AuthenticationState::initial());
    provide_context(auth);

    // Effects only run in the browser.
    Effect::new(move || auth.refresh());

    Effect::new(move || {
        if auth.state().is_guest() {
            browser::clear_non_member_storage();
        }
    });

    children()
}

#[cfg(test)]
mod tests {
    use super::*;
    use readybag_core::UserId;

    fn member() -> AuthUser {
        AuthUser::new(
            UserId::new(7),
            "mina@example.com".to_string(),
            Some("Mina".to_string()),
        )
    }

    #[test]
    fn starts_loading_and_anonymous() {
        let owner = Owner::new();
        owner.with(|| {
            let auth = AuthContext::new(AuthenticationState::initial());
            assert!(auth.is_loading());
            assert!(!auth.is_authenticated());
            assert_eq!(auth.state(), AuthenticationState::initial());
        });
    }

    #[test]
    fn resolved_state_exposes_the_member() {
        let owner = Owner::new();
        owner.with(|| {
            let auth = AuthContext::new(AuthenticationState::resolved(Some(member())));
            assert!(!auth.is_loading());
            assert!(auth.is_authenticated());
            assert_eq!(auth.user().map(|u| u.display_name().to_string()), Some("Mina".to_string()));
        });
    }

    #[test]
    fn notices_can_be_dismissed() {
        let owner = Owner::new();
        owner.with(|| {
            let auth = AuthContext::new(AuthenticationState::resolved(None));
            auth.notice.set(Some(Notice::destructive("Sign-in failed", "Wrong password")));
            assert_eq!(
                auth.notice().map(|n| n.variant),
                Some(NoticeVariant::Destructive)
            );

            auth.dismiss_notice();
            assert_eq!(auth.notice(), None);
        });
    }
}
