//! Page components for the application.

pub mod auth;
pub mod home;
pub mod not_found;

pub use auth::AuthPage;
pub use home::HomePage;
pub use not_found::NotFound;
