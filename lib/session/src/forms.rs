//! Auth form inputs and the rules they must pass before submission.
//!
//! Each `*Form` holds raw field text as typed by the user; `validate`
//! turns it into the matching `*Input` body the backend accepts.

use crate::error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Minimum length for new passwords.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("valid email pattern")
});

fn validated_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if EMAIL.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn validated_new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Body of `POST /api/auth/reset-password-request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequestInput {
    pub email: String,
}

/// Body of `POST /api/auth/reset-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordInput {
    pub token: String,
    pub password: String,
}

/// Login form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Checks the fields and builds the login body.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: email shape, then non-empty password.
    pub fn validate(&self) -> Result<LoginInput, ValidationError> {
        let email = validated_email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(LoginInput {
            email,
            password: self.password.clone(),
        })
    }
}

/// Registration form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub nickname: String,
}

impl RegisterForm {
    /// Checks the fields and builds the registration body.
    ///
    /// A blank nickname is sent as absent.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: email shape, password length,
    /// then confirmation match.
    pub fn validate(&self) -> Result<RegisterInput, ValidationError> {
        let email = validated_email(&self.email)?;
        validated_new_password(&self.password, &self.confirm_password)?;

        let nickname = Some(self.nickname.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(RegisterInput {
            email,
            password: self.password.clone(),
            nickname,
        })
    }
}

/// "Forgot password" form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    /// Checks the email and builds the reset request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] for a malformed address.
    pub fn validate(&self) -> Result<ResetPasswordRequestInput, ValidationError> {
        Ok(ResetPasswordRequestInput {
            email: validated_email(&self.email)?,
        })
    }
}

/// New-password form reached from an emailed reset link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPasswordForm {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

impl NewPasswordForm {
    /// Checks the fields and builds the reset body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingResetToken`] when the link carried
    /// no token, otherwise the first failing password rule.
    pub fn validate(&self) -> Result<ResetPasswordInput, ValidationError> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(ValidationError::MissingResetToken);
        }
        validated_new_password(&self.password, &self.confirm_password)?;
        Ok(ResetPasswordInput {
            token: token.to_string(),
            password: self.password.clone(),
        })
    }
}
