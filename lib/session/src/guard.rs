//! Route guarding based on authentication state.
//!
//! Routes are open to guests unless registered with
//! [`RouteSpec::require_auth`]. A guarded route resolves to exactly one
//! [`GuardOutcome`] per render:
//!
//! | loading | requires auth | signed in | outcome    |
//! |---------|---------------|-----------|------------|
//! | yes     | any           | any       | `Loading`  |
//! | no      | yes           | no        | `Redirect` |
//! | no      | no            | any       | `Allowed`  |
//! | no      | yes           | yes       | `Allowed`  |
//!
//! Evaluation reads the injected session and nothing else, so repeated
//! calls with unchanged state give the same outcome.

use crate::state::AuthSession;

/// Where guests are sent when they open a members-only route.
pub const AUTH_ENTRY_PATH: &str = "/auth";

/// A route registration: path pattern, what to render, and its policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec<V> {
    path: String,
    view: V,
    require_auth: bool,
}

impl<V> RouteSpec<V> {
    /// Registers a route open to everyone.
    #[must_use]
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            view,
            require_auth: false,
        }
    }

    /// Sets whether a signed-in member is required.
    #[must_use]
    pub fn require_auth(mut self, require_auth: bool) -> Self {
        self.require_auth = require_auth;
        self
    }

    /// Returns the route path pattern.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the view rendered when access is allowed.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns true if guests are redirected away from this route.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        self.require_auth
    }

    /// Decides what this route renders for the given session.
    ///
    /// A pending identity check always yields `Loading`, even when the
    /// session still reports a previous user.
    pub fn evaluate<A>(&self, session: &A) -> GuardOutcome<'_, V>
    where
        A: AuthSession + ?Sized,
    {
        if session.is_loading() {
            return GuardOutcome::Loading { path: &self.path };
        }

        if self.require_auth && !session.is_authenticated() {
            tracing::debug!(path = %self.path, "Guest redirected from members-only route");
            return GuardOutcome::Redirect {
                from: &self.path,
                to: AUTH_ENTRY_PATH,
            };
        }

        GuardOutcome::Allowed {
            path: &self.path,
            view: &self.view,
        }
    }
}

/// What a guarded route renders.
#[derive(Debug, PartialEq, Eq)]
pub enum GuardOutcome<'a, V> {
    /// Identity check pending: show a loading indicator at `path`.
    Loading { path: &'a str },
    /// Guest on a members-only route: navigate to `to` instead.
    Redirect { from: &'a str, to: &'static str },
    /// Render `view` at `path`.
    Allowed { path: &'a str, view: &'a V },
}

impl<V> GuardOutcome<'_, V> {
    /// Returns true if the route's view is rendered.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the path this outcome is bound to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Loading { path } | Self::Allowed { path, .. } => path,
            Self::Redirect { from, .. } => from,
        }
    }
}

impl<V> Clone for GuardOutcome<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for GuardOutcome<'_, V> {}
