//! Forwarding `/api` requests to the backend.
//!
//! The browser only talks to this host, so session cookies set by the
//! backend stay first-party. Requests and responses pass through
//! unchanged apart from hop-by-hop headers: the standard set plus any
//! header named in `Connection`.

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use readybag_core::Result;
use reqwest::Url;
use std::fmt;
use std::sync::Arc;

/// Headers that describe a single connection and must not be forwarded.
/// `host` and `content-length` are recomputed for the next hop.
const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

/// Errors from setting up request forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    /// The configured backend origin is not a valid URL.
    InvalidBackendUrl { url: String, reason: String },
    /// The forwarding HTTP client could not be constructed.
    ClientBuild { reason: String },
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBackendUrl { url, reason } => {
                write!(f, "invalid backend url '{url}': {reason}")
            }
            Self::ClientBuild { reason } => write!(f, "failed to build proxy client: {reason}"),
        }
    }
}

impl std::error::Error for ProxyError {}

/// Shared state for the forwarding handler.
#[derive(Debug)]
pub struct ProxyState {
    http: reqwest::Client,
    backend: Url,
    max_body_bytes: usize,
}

impl ProxyState {
    /// Creates forwarding state for the backend at `backend_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::InvalidBackendUrl`] if the URL does not parse
    /// and [`ProxyError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(backend_url: &str, max_body_bytes: usize) -> Result<Self, ProxyError> {
        let backend = Url::parse(backend_url).map_err(|e| ProxyError::InvalidBackendUrl {
            url: backend_url.to_string(),
            reason: e.to_string(),
        })?;

        // Redirects and cookies belong to the browser, not this hop.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProxyError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            backend,
            max_body_bytes,
        })
    }

    /// Returns the backend origin requests are sent to.
    #[must_use]
    pub fn backend(&self) -> &Url {
        &self.backend
    }
}

fn forwardable(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let mut forwarded = headers.clone();
    for name in HOP_BY_HOP.iter().copied().chain(listed.iter().map(String::as_str)) {
        forwarded.remove(name);
    }
    forwarded
}

fn bad_gateway(message: &str) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "message": message })),
    )
        .into_response()
}

/// Forwards one request to the backend and relays its response.
pub async fn forward(State(state): State<Arc<ProxyState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path().to_string(), ToString::to_string);

    let target = match state.backend.join(&path_and_query) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(error = %e, path = %path_and_query, "Unroutable API path");
            return (StatusCode::BAD_REQUEST, "Invalid API path").into_response();
        }
    };

    let body = match to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, path = %path_and_query, "Request body rejected");
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
    };

    let upstream = state
        .http
        .request(parts.method.clone(), target.clone())
        .headers(forwardable(&parts.headers))
        .body(body)
        .send()
        .await;

    let upstream = match upstream {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                error = %e,
                method = %parts.method,
                target = %target,
                "Backend unreachable"
            );
            return bad_gateway("Backend unavailable");
        }
    };

    let status = upstream.status();
    let headers = forwardable(upstream.headers());
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, target = %target, "Failed to read backend response");
            return bad_gateway("Backend response interrupted");
        }
    };

    tracing::debug!(method = %parts.method, target = %target, status = %status, "Forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        extract::Query,
        routing::{any, get, post},
    };
    use std::collections::HashMap;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });
        format!("http://{addr}")
    }

    async fn echo_login(headers: HeaderMap, body: String) -> Response {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let cookie = headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (
            StatusCode::CREATED,
            [(header::SET_COOKIE, "connect.sid=abc; Path=/; HttpOnly")],
            Json(serde_json::json!({
                "content_type": content_type,
                "cookie": cookie,
                "body": body,
            })),
        )
            .into_response()
    }

    async fn echo_query(Query(params): Query<HashMap<String, String>>) -> Json<HashMap<String, String>> {
        Json(params)
    }

    async fn host_for(backend: &str, max_body_bytes: usize) -> String {
        let state = Arc::new(ProxyState::new(backend, max_body_bytes).expect("valid state"));
        let router = Router::new()
            .route("/api/{*path}", any(forward))
            .with_state(state);
        spawn(router).await
    }

    #[test]
    fn rejects_invalid_backend_url() {
        let err = ProxyState::new("::not a url::", 1024).unwrap_err();
        assert!(matches!(
            err.current_context(),
            ProxyError::InvalidBackendUrl { url, .. } if url == "::not a url::"
        ));
    }

    #[test]
    fn strips_hop_by_hop_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "localhost:3000".parse().expect("header"));
        headers.insert("keep-alive", "timeout=5".parse().expect("header"));
        headers.insert(header::TE, "trailers".parse().expect("header"));
        headers.insert(header::PROXY_AUTHORIZATION, "Basic Zm9v".parse().expect("header"));
        headers.insert(header::COOKIE, "connect.sid=abc".parse().expect("header"));

        let forwarded = forwardable(&headers);
        assert!(!forwarded.contains_key(header::HOST));
        assert!(!forwarded.contains_key("keep-alive"));
        assert!(!forwarded.contains_key(header::TE));
        assert!(!forwarded.contains_key(header::PROXY_AUTHORIZATION));
        assert!(forwarded.contains_key(header::COOKIE));
    }

    #[test]
    fn strips_headers_named_in_connection() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONNECTION, "close, X-Session-Hint".parse().expect("header"));
        headers.insert("x-session-hint", "abc".parse().expect("header"));
        headers.insert(header::ACCEPT, "application/json".parse().expect("header"));

        let forwarded = forwardable(&headers);
        assert!(!forwarded.contains_key(header::CONNECTION));
        assert!(!forwarded.contains_key("x-session-hint"));
        assert!(forwarded.contains_key(header::ACCEPT));
    }

    #[tokio::test]
    async fn relays_body_cookies_and_status() {
        let backend = spawn(Router::new().route("/api/auth/login", post(echo_login))).await;
        let host = host_for(&backend, 1024).await;

        let response = reqwest::Client::new()
            .post(format!("{host}/api/auth/login"))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::COOKIE, "theme=dark")
            .body(r#"{"email":"a@b.kr","password":"pw"}"#)
            .send()
            .await
            .expect("proxy answers");

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(
            response
                .headers()
                .get(header::SET_COOKIE)
                .is_some_and(|v| v.as_bytes().starts_with(b"connect.sid=abc"))
        );

        let echoed: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(echoed["content_type"], "application/json");
        assert_eq!(echoed["cookie"], "theme=dark");
        assert_eq!(echoed["body"], r#"{"email":"a@b.kr","password":"pw"}"#);
    }

    #[tokio::test]
    async fn keeps_query_string() {
        let backend = spawn(Router::new().route("/api/currency", get(echo_query))).await;
        let host = host_for(&backend, 1024).await;

        let params: HashMap<String, String> = reqwest::get(format!("{host}/api/currency?from=JPY&to=KRW"))
            .await
            .expect("proxy answers")
            .json()
            .await
            .expect("json body");

        assert_eq!(params.get("from").map(String::as_str), Some("JPY"));
        assert_eq!(params.get("to").map(String::as_str), Some("KRW"));
    }

    #[tokio::test]
    async fn oversized_body_is_refused() {
        let backend = spawn(Router::new().route("/api/auth/login", post(echo_login))).await;
        let host = host_for(&backend, 8).await;

        let response = reqwest::Client::new()
            .post(format!("{host}/api/auth/login"))
            .body("this body is longer than eight bytes")
            .send()
            .await
            .expect("proxy answers");

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn unreachable_backend_is_bad_gateway() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("local addr").port()
        };
        let host = host_for(&format!("http://127.0.0.1:{port}"), 1024).await;

        let response = reqwest::get(format!("{host}/api/auth/user"))
            .await
            .expect("proxy answers");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["message"], "Backend unavailable");
    }
}
