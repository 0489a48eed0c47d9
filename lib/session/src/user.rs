//! The signed-in user as reported by the backend.

use readybag_core::UserId;
use serde::{Deserialize, Serialize};

/// A member account returned by `/api/auth/user`, login, and register.
///
/// The backend never sends the password hash, so this carries only the
/// fields the UI displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    id: UserId,
    email: String,
    #[serde(default)]
    nickname: Option<String>,
}

impl AuthUser {
    /// Creates a user record.
    #[must_use]
    pub fn new(id: UserId, email: String, nickname: Option<String>) -> Self {
        Self {
            id,
            email,
            nickname,
        }
    }

    /// Returns the backend user ID.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the login email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the nickname, if one was set at registration.
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Name shown in the header: the nickname, or the email when the
    /// nickname is missing or blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref().map(str::trim) {
            Some(nickname) if !nickname.is_empty() => nickname,
            _ => &self.email,
        }
    }
}
