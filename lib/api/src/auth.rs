//! Client for the backend's `/api/auth/*` endpoints.
//!
//! The backend keeps login state in a session cookie, so every call here
//! goes through the credentials-including [`ApiClient`]. Apart from
//! [`AuthClient::current_user`], non-success statuses become
//! [`ApiError::Rejected`] carrying the backend's `message` field, or a
//! fixed fallback when the body has none.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::routes;
use readybag_core::Result;
use readybag_session::{
    AuthUser, LoginInput, RegisterInput, ResetPasswordInput, ResetPasswordRequestInput,
};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// `{ "message": "..." }` body returned by reset endpoints and errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Auth endpoints over a shared [`ApiClient`].
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    /// Creates an auth client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Returns the underlying request client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Looks up the signed-in user.
    ///
    /// Returns `None` for guests (401) and for every failure: an identity
    /// check that cannot complete is treated as signed out.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Option<AuthUser> {
        let request = match ApiRequest::empty("GET", routes::AUTH_USER) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Failed to build current user request");
                return None;
            }
        };

        let response = match self.api.send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Current user lookup failed");
                return None;
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            debug!("No signed-in user");
            return None;
        }
        if !status.is_success() {
            warn!(status = %status, "Current user lookup returned an error status");
            return None;
        }

        match decode::<AuthUser>(response).await {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Current user response did not decode");
                None
            }
        }
    }

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for bad credentials, or a transport
    /// or decode error.
    #[instrument(skip(self, input))]
    pub async fn login(&self, input: &LoginInput) -> Result<AuthUser, ApiError> {
        let request = ApiRequest::json("POST", routes::AUTH_LOGIN, input)?;
        let response = success(self.api.send(request).await?, "Login failed").await?;
        let user: AuthUser = decode(response).await?;
        info!(user_id = %user.id(), "Signed in");
        Ok(user)
    }

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the backend refuses the
    /// registration (for example, email already in use).
    #[instrument(skip(self, input))]
    pub async fn register(&self, input: &RegisterInput) -> Result<AuthUser, ApiError> {
        let request = ApiRequest::json("POST", routes::AUTH_REGISTER, input)?;
        let response = success(self.api.send(request).await?, "Registration failed").await?;
        let user: AuthUser = decode(response).await?;
        info!(user_id = %user.id(), "Registered");
        Ok(user)
    }

    /// Ends the backend session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] if the backend fails to log out.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = ApiRequest::empty("POST", routes::AUTH_LOGOUT)?;
        success(self.api.send(request).await?, "Logout failed").await?;
        info!("Signed out");
        Ok(())
    }

    /// Asks the backend to email a password reset link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] if the request is refused.
    #[instrument(skip(self, input))]
    pub async fn request_password_reset(
        &self,
        input: &ResetPasswordRequestInput,
    ) -> Result<MessageResponse, ApiError> {
        let request = ApiRequest::json("POST", routes::AUTH_RESET_PASSWORD_REQUEST, input)?;
        let response = success(
            self.api.send(request).await?,
            "Password reset request failed",
        )
        .await?;
        decode(response).await
    }

    /// Sets a new password using an emailed reset token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for an invalid or expired token.
    #[instrument(skip(self, input))]
    pub async fn reset_password(
        &self,
        input: &ResetPasswordInput,
    ) -> Result<MessageResponse, ApiError> {
        let request = ApiRequest::json("POST", routes::AUTH_RESET_PASSWORD, input)?;
        let response = success(self.api.send(request).await?, "Password reset failed").await?;
        decode(response).await
    }
}

/// Passes success responses through; turns anything else into a rejection.
async fn success(response: Response, fallback: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_string());

    debug!(status = %status, message = %message, "Backend rejected request");
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    }
    .into())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        ApiError::Decode {
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::StatusCode as AxumStatus,
        response::{IntoResponse, Response as AxumResponse},
        routing::{get, post},
    };
    use axum_extra::extract::cookie::{Cookie, CookieJar};
    use readybag_core::UserId;
    use serde_json::json;

    const SESSION_COOKIE: &str = "connect.sid";
    const SESSION_VALUE: &str = "test-session";

    fn member_json() -> serde_json::Value {
        json!({"id": 9, "email": "yoon@example.com", "nickname": "Yoon"})
    }

    fn signed_in(jar: &CookieJar) -> bool {
        jar.get(SESSION_COOKIE)
            .is_some_and(|c| c.value() == SESSION_VALUE)
    }

    async fn current_user(jar: CookieJar) -> AxumResponse {
        if signed_in(&jar) {
            Json(member_json()).into_response()
        } else {
            (
                AxumStatus::UNAUTHORIZED,
                Json(json!({"message": "Not authenticated"})),
            )
                .into_response()
        }
    }

    async fn login(jar: CookieJar, Json(input): Json<LoginInput>) -> AxumResponse {
        if input.email == "yoon@example.com" && input.password == "correct horse" {
            let cookie = Cookie::build((SESSION_COOKIE, SESSION_VALUE)).path("/");
            (jar.add(cookie), Json(member_json())).into_response()
        } else {
            (
                AxumStatus::UNAUTHORIZED,
                Json(json!({"message": "Invalid email or password"})),
            )
                .into_response()
        }
    }

    async fn logout(jar: CookieJar) -> AxumResponse {
        let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
        (jar, Json(json!({"message": "Logged out"}))).into_response()
    }

    async fn register(Json(input): Json<RegisterInput>) -> AxumResponse {
        if input.email == "taken@example.com" {
            (
                AxumStatus::BAD_REQUEST,
                Json(json!({"message": "Email already in use"})),
            )
                .into_response()
        } else {
            Json(json!({"id": 10, "email": input.email, "nickname": input.nickname}))
                .into_response()
        }
    }

    async fn reset_request(Json(_input): Json<ResetPasswordRequestInput>) -> AxumResponse {
        Json(json!({"message": "Reset link sent"})).into_response()
    }

    async fn reset(Json(_input): Json<ResetPasswordInput>) -> AxumResponse {
        // No message field: the client falls back to its own wording.
        (AxumStatus::BAD_REQUEST, Json(json!({}))).into_response()
    }

    async fn broken_user() -> AxumResponse {
        (AxumStatus::INTERNAL_SERVER_ERROR, "boom").into_response()
    }

    /// Starts a fake backend and returns a client pointed at it.
    async fn spawn_backend(router: Router) -> AuthClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });

        let api = ApiClient::new(&format!("http://{addr}")).expect("valid base url");
        AuthClient::new(api)
    }

    fn backend() -> Router {
        Router::new()
            .route(routes::AUTH_USER, get(current_user))
            .route(routes::AUTH_LOGIN, post(login))
            .route(routes::AUTH_LOGOUT, post(logout))
            .route(routes::AUTH_REGISTER, post(register))
            .route(routes::AUTH_RESET_PASSWORD_REQUEST, post(reset_request))
            .route(routes::AUTH_RESET_PASSWORD, post(reset))
    }

    fn login_input(password: &str) -> LoginInput {
        LoginInput {
            email: "yoon@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn guest_has_no_current_user() {
        let client = spawn_backend(backend()).await;
        assert_eq!(client.current_user().await, None);
    }

    #[tokio::test]
    async fn credentials_are_sent_with_later_requests() {
        let client = spawn_backend(backend()).await;

        let user = client
            .login(&login_input("correct horse"))
            .await
            .expect("login succeeds");
        assert_eq!(user.id(), UserId::new(9));

        let current = client.current_user().await.expect("session cookie sent");
        assert_eq!(current.display_name(), "Yoon");
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let client = spawn_backend(backend()).await;
        client
            .login(&login_input("correct horse"))
            .await
            .expect("login succeeds");

        client.logout().await.expect("logout succeeds");
        assert_eq!(client.current_user().await, None);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_with_backend_message() {
        let client = spawn_backend(backend()).await;

        let err = client.login(&login_input("wrong")).await.unwrap_err();
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Invalid email or password"));
    }

    #[tokio::test]
    async fn register_surfaces_conflict_message() {
        let client = spawn_backend(backend()).await;
        let input = RegisterInput {
            email: "taken@example.com".to_string(),
            password: "long-enough".to_string(),
            nickname: None,
        };

        let err = client.register(&input).await.unwrap_err();
        assert!(err.to_string().contains("Email already in use"));
    }

    #[tokio::test]
    async fn register_returns_created_user() {
        let client = spawn_backend(backend()).await;
        let input = RegisterInput {
            email: "new@example.com".to_string(),
            password: "long-enough".to_string(),
            nickname: Some("Newbie".to_string()),
        };

        let user = client.register(&input).await.expect("registered");
        assert_eq!(user.email(), "new@example.com");
        assert_eq!(user.nickname(), Some("Newbie"));
    }

    #[tokio::test]
    async fn reset_request_returns_backend_message() {
        let client = spawn_backend(backend()).await;
        let input = ResetPasswordRequestInput {
            email: "yoon@example.com".to_string(),
        };

        let response = client
            .request_password_reset(&input)
            .await
            .expect("request accepted");
        assert_eq!(response.message, "Reset link sent");
    }

    #[tokio::test]
    async fn rejection_without_message_uses_fallback() {
        let client = spawn_backend(backend()).await;
        let input = ResetPasswordInput {
            token: "expired".to_string(),
            password: "long-enough".to_string(),
        };

        let err = client.reset_password(&input).await.unwrap_err();
        assert!(err.to_string().contains("400: Password reset failed"));
    }

    #[tokio::test]
    async fn server_error_on_user_lookup_reads_as_signed_out() {
        let router = Router::new().route(routes::AUTH_USER, get(broken_user));
        let client = spawn_backend(router).await;

        assert_eq!(client.current_user().await, None);
    }
}
