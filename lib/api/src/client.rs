//! Dispatching helper requests with reqwest.

use crate::error::ApiError;
use crate::request::ApiRequest;
use readybag_core::Result;
use reqwest::Url;
use tracing::{debug, instrument, warn};

/// Sends [`ApiRequest`]s to the backend.
///
/// Relative request targets resolve against the base URL. Clones share
/// one connection pool and, on native targets, one cookie store, so a
/// session cookie set by one call is sent by every later call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` does not parse and
    /// [`ApiError::ClientBuild`] if the HTTP client cannot be created.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let http = http_client().map_err(|e| ApiError::ClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self { http, base_url })
    }

    /// Returns the URL relative targets resolve against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the wire request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the target cannot be resolved.
    pub fn build(&self, request: ApiRequest) -> Result<reqwest::Request, ApiError> {
        let url = request.url().to_string();
        request
            .into_builder(&self.http, &self.base_url)?
            .build()
            .map_err(|e| {
                ApiError::InvalidUrl {
                    url,
                    reason: e.to_string(),
                }
                .into()
            })
    }

    /// Sends a request and returns the raw response.
    ///
    /// Status codes are not interpreted: a 401 or 500 is still `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrives, or a
    /// construction error from [`ApiClient::build`].
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn send(&self, request: ApiRequest) -> Result<reqwest::Response, ApiError> {
        let method = request.method().to_string();
        let wire = self.build(request)?;
        let url = wire.url().to_string();

        let response = self.http.execute(wire).await.map_err(|e| {
            warn!(error = %e, "Request failed before a response arrived");
            ApiError::Transport {
                method,
                url,
                reason: e.to_string(),
            }
        })?;

        debug!(status = %response.status(), "Response received");
        Ok(response)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().cookie_store(true).build()
}

#[cfg(target_arch = "wasm32")]
fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().build()
}
