//! Authentication state and route guarding for the ReadyBag front end.
//!
//! This crate provides:
//! - The signed-in user (`AuthUser`) as reported by the backend
//! - Authentication state (`AuthenticationState`) and the `AuthSession`
//!   trait through which guards read it
//! - The route guard (`RouteSpec`, `GuardOutcome`)
//! - Auth form inputs and their validation rules
//! - Helpers for cleaning backend error messages and clearing guest data
//!
//! Nothing here touches the DOM or the network, so every rule can be
//! exercised in plain unit tests.
//!
//! # Example
//!
//! ```
//! use readybag_core::UserId;
//! use readybag_session::{AuthUser, AuthenticationState, GuardOutcome, RouteSpec, AUTH_ENTRY_PATH};
//!
//! let lists = RouteSpec::new("/lists", "ListsPage").require_auth(true);
//!
//! // Identity check still in flight
//! let state = AuthenticationState::initial();
//! assert_eq!(lists.evaluate(&state), GuardOutcome::Loading { path: "/lists" });
//!
//! // Resolved as a guest
//! let state = AuthenticationState::resolved(None);
//! assert_eq!(
//!     lists.evaluate(&state),
//!     GuardOutcome::Redirect { from: "/lists", to: AUTH_ENTRY_PATH },
//! );
//!
//! // Resolved as a member
//! let user = AuthUser::new(UserId::new(1), "alice@example.com".to_string(), None);
//! let state = AuthenticationState::resolved(Some(user));
//! assert!(lists.evaluate(&state).is_allowed());
//! ```

pub mod error;
pub mod forms;
pub mod guard;
pub mod message;
pub mod state;
pub mod storage;
pub mod user;

// Re-export main types at crate root
pub use error::ValidationError;
pub use forms::{
    ForgotPasswordForm, LoginForm, LoginInput, MIN_PASSWORD_LEN, NewPasswordForm, RegisterForm,
    RegisterInput, ResetPasswordInput, ResetPasswordRequestInput,
};
pub use guard::{AUTH_ENTRY_PATH, GuardOutcome, RouteSpec};
pub use message::clean_error_message;
pub use state::{AuthSession, AuthenticationState};
pub use storage::{VISITED_SESSION_KEY, non_member_keys_to_clear};
pub use user::AuthUser;
