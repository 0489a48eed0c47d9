//! Cleaning backend error text for display.
//!
//! Failed requests surface as text like `401: {"message":"Wrong password"}`.
//! Users should only see the message part.

use regex::Regex;
use std::sync::LazyLock;

static EMBEDDED_MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\d+:\s*\{"message":"([^"]+)"\}"#).expect("valid embedded message pattern")
});

static STATUS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+:\s*").expect("valid status prefix pattern"));

/// Reduces raw error text to the message a user should see.
///
/// An embedded `{"message":"..."}` payload wins; otherwise a leading
/// `<status>: ` prefix is stripped.
#[must_use]
pub fn clean_error_message(raw: &str) -> String {
    if let Some(message) = EMBEDDED_MESSAGE
        .captures(raw)
        .and_then(|caps| caps.get(1))
    {
        return message.as_str().to_string();
    }

    STATUS_PREFIX.replace(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_embedded_json_message() {
        assert_eq!(
            clean_error_message(r#"401: {"message":"Invalid email or password"}"#),
            "Invalid email or password"
        );
    }

    #[test]
    fn strips_status_prefix() {
        assert_eq!(clean_error_message("500: Server exploded"), "Server exploded");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(clean_error_message("Network unreachable"), "Network unreachable");
    }

    #[test]
    fn only_strips_leading_prefix() {
        assert_eq!(clean_error_message("retry after 30: later"), "retry after 30: later");
    }
}
