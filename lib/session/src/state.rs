//! Authentication state and the trait guards read it through.
//!
//! The state is owned by whichever component resolves identity (the
//! browser-side auth provider in the web app). Guards only read it, and
//! they read it through [`AuthSession`] so tests can hand them a plain
//! value instead of a live reactive runtime.

use crate::user::AuthUser;

/// Read access to the current session's authentication status.
pub trait AuthSession {
    /// True while the identity check has not resolved yet.
    fn is_loading(&self) -> bool;

    /// True when a member is signed in.
    ///
    /// May still be true while loading if a previous value is cached;
    /// callers must check [`is_loading`](Self::is_loading) first.
    fn is_authenticated(&self) -> bool;
}

/// Snapshot of who is signed in and whether that is known yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationState {
    user: Option<AuthUser>,
    is_loading: bool,
}

impl AuthenticationState {
    /// State at session start: identity unknown, check pending.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    /// State after the identity check resolved.
    #[must_use]
    pub fn resolved(user: Option<AuthUser>) -> Self {
        Self {
            user,
            is_loading: false,
        }
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Returns true while the identity check is pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns true once resolved with no signed-in user.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        !self.is_loading && self.user.is_none()
    }
}

impl Default for AuthenticationState {
    fn default() -> Self {
        Self::initial()
    }
}

impl AuthSession for AuthenticationState {
    fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
