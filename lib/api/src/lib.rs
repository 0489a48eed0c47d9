//! HTTP access to the ReadyBag backend.
//!
//! This crate provides:
//! - `ApiRequest`, the JSON request helper (JSON body, JSON content type,
//!   credentials included)
//! - `ApiClient`, which dispatches helper requests with reqwest
//! - `AuthClient`, the `/api/auth/*` endpoints the session layer relies on
//!
//! # Example
//!
//! ```
//! use readybag_api::{ApiClient, ApiRequest};
//! use serde_json::json;
//!
//! let client = ApiClient::new("http://127.0.0.1:5000").unwrap();
//! let request = ApiRequest::json("POST", "/api/login", &json!({"username": "a", "password": "b"})).unwrap();
//!
//! let wire = client.build(request).unwrap();
//! assert_eq!(wire.headers()["content-type"], "application/json");
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod request;
pub mod routes;

pub use auth::{AuthClient, MessageResponse};
pub use client::ApiClient;
pub use error::ApiError;
pub use request::{ApiRequest, JSON_CONTENT_TYPE};
