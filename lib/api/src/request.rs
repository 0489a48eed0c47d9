//! The JSON request helper.
//!
//! An [`ApiRequest`] is a fully built request value: method, target,
//! optional JSON body. Every request carries `Content-Type:
//! application/json` and is sent with credentials so the backend's
//! session cookie travels with it. Dispatch happens in
//! [`ApiClient`](crate::client::ApiClient).

use crate::error::ApiError;
use readybag_core::Result;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde::Serialize;

/// Content type attached to every helper request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single JSON-over-HTTP request, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    url: String,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Builds a request, encoding `data` as the JSON body when present.
    ///
    /// `method` is any HTTP token; the standard verbs are matched
    /// case-insensitively and normalized to upper case.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidMethod`] for a method that is not an
    /// HTTP token and [`ApiError::Serialize`] if `data` cannot be encoded.
    pub fn new<T>(method: &str, url: impl Into<String>, data: Option<&T>) -> Result<Self, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let method = parse_method(method)?;
        let body = data
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| ApiError::Serialize {
                reason: e.to_string(),
            })?;

        Ok(Self {
            method,
            url: url.into(),
            body,
        })
    }

    /// Builds a request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiRequest::new`].
    pub fn json<T>(method: &str, url: impl Into<String>, data: &T) -> Result<Self, ApiError>
    where
        T: Serialize + ?Sized,
    {
        Self::new(method, url, Some(data))
    }

    /// Builds a request without a body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidMethod`] for a malformed method.
    pub fn empty(method: &str, url: impl Into<String>) -> Result<Self, ApiError> {
        Self::new::<()>(method, url, None)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the target as given, before base URL resolution.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the encoded JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Headers attached on dispatch.
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers
    }

    /// Resolves the target against `base`. Absolute URLs replace the base.
    pub(crate) fn resolve(&self, base: &Url) -> Result<Url, ApiError> {
        base.join(&self.url).map_err(|e| {
            ApiError::InvalidUrl {
                url: self.url.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Turns this request into a reqwest builder on `client`.
    ///
    /// In the browser the request uses the fetch `credentials: "include"`
    /// mode; on native targets the client's shared cookie store plays
    /// that role.
    pub(crate) fn into_builder(
        self,
        client: &reqwest::Client,
        base: &Url,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let url = self.resolve(base)?;
        let headers = self.headers();
        let mut builder = client.request(self.method, url).headers(headers);

        if let Some(body) = self.body {
            builder = builder.body(body);
        }

        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();

        Ok(builder)
    }
}

fn parse_method(raw: &str) -> Result<Method, ApiError> {
    const STANDARD: [&str; 6] = ["DELETE", "GET", "HEAD", "OPTIONS", "POST", "PUT"];

    let upper = raw.to_ascii_uppercase();
    let normalized = if STANDARD.contains(&upper.as_str()) {
        upper.as_str()
    } else {
        raw
    };

    Method::from_bytes(normalized.as_bytes()).map_err(|_| {
        ApiError::InvalidMethod {
            method: raw.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_with_data_has_json_body_and_header() {
        let data = json!({"username": "a", "password": "b"});
        let request = ApiRequest::new("POST", "/api/login", Some(&data)).expect("valid request");

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.url(), "/api/login");
        assert_eq!(
            request.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );

        let body: serde_json::Value =
            serde_json::from_slice(request.body().expect("body present")).expect("json body");
        assert_eq!(body, data);
    }

    #[test]
    fn request_without_data_has_no_body() {
        let request = ApiRequest::empty("GET", "/api/auth/user").expect("valid request");

        assert!(request.body().is_none());
        assert!(request.headers().contains_key(CONTENT_TYPE));
    }

    #[test]
    fn standard_methods_are_case_insensitive() {
        let request = ApiRequest::empty("delete", "/api/user-products/3").expect("valid");
        assert_eq!(*request.method(), Method::DELETE);
    }

    #[test]
    fn extension_methods_pass_through() {
        let request = ApiRequest::empty("PATCH", "/api/user-products/3").expect("valid");
        assert_eq!(request.method().as_str(), "PATCH");
    }

    #[test]
    fn malformed_method_is_rejected() {
        let err = ApiRequest::empty("PO ST", "/api/login").unwrap_err();
        assert!(err.to_string().contains("invalid HTTP method"));
    }

    #[test]
    fn relative_urls_resolve_against_base() {
        let base = Url::parse("http://127.0.0.1:5000").expect("base url");
        let request = ApiRequest::empty("GET", "/api/currency").expect("valid");

        assert_eq!(
            request.resolve(&base).expect("resolves").as_str(),
            "http://127.0.0.1:5000/api/currency"
        );
    }

    #[test]
    fn absolute_urls_replace_base() {
        let base = Url::parse("http://127.0.0.1:5000").expect("base url");
        let request = ApiRequest::empty("GET", "https://rates.example.com/latest").expect("valid");

        assert_eq!(
            request.resolve(&base).expect("resolves").as_str(),
            "https://rates.example.com/latest"
        );
    }
}
