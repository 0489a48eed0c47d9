//! Backend auth endpoint paths.

/// Current signed-in user; 401 for guests.
pub const AUTH_USER: &str = "/api/auth/user";
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_REGISTER: &str = "/api/auth/register";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
pub const AUTH_RESET_PASSWORD_REQUEST: &str = "/api/auth/reset-password-request";
pub const AUTH_RESET_PASSWORD: &str = "/api/auth/reset-password";

