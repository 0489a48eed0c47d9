//! Error types for the session crate.

use std::fmt;

/// Reasons an auth form is rejected before it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Email is empty or not shaped like an address.
    InvalidEmail,
    /// Login password is empty.
    MissingPassword,
    /// New password is shorter than the minimum.
    PasswordTooShort { min: usize },
    /// Password and confirmation differ.
    PasswordMismatch,
    /// Password reset link has no token.
    MissingResetToken,
}

impl ValidationError {
    /// Name of the form field the error belongs to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
            Self::MissingPassword | Self::PasswordTooShort { .. } => "password",
            Self::PasswordMismatch => "confirm_password",
            Self::MissingResetToken => "token",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "enter a valid email address"),
            Self::MissingPassword => write!(f, "enter your password"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::PasswordMismatch => write!(f, "passwords do not match"),
            Self::MissingResetToken => write!(f, "password reset link is missing its token"),
        }
    }
}

impl std::error::Error for ValidationError {}
