//! Error handling foundation for the ReadyBag front end.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each crate defines its own error types in its own error module and
//! attaches layer-appropriate context as errors propagate.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
