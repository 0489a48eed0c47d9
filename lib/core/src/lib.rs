//! Core types and utilities for the ReadyBag front end.
//!
//! This crate provides the foundational types and error handling shared
//! by the session, API, and web crates.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ParseIdError, UserId};
