//! Access to the browser: page origin, API client, web storage.
//!
//! Everything here is a no-op or `None` outside the browser, so server
//! rendering never touches it.

use readybag_api::{ApiClient, ApiError, AuthClient};
use readybag_core::Result;

/// Origin of the current page, e.g. `https://readybag.app`.
#[must_use]
pub fn api_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Builds an auth client targeting the page's own origin.
///
/// # Errors
///
/// Returns [`ApiError::InvalidUrl`] when there is no page origin, which
/// is always the case during server rendering.
pub fn auth_client() -> Result<AuthClient, ApiError> {
    let origin = api_origin().ok_or_else(|| ApiError::InvalidUrl {
        url: String::new(),
        reason: "no page origin outside the browser".to_string(),
    })?;
    Ok(AuthClient::new(ApiClient::new(&origin)?))
}

/// Drops locally stored guest data.
///
/// Prefixed guest keys are always removed; the fixed first-visit keys
/// only once per browser session. No storage-change event is dispatched
/// afterwards since no view reads guest keys back. Failed removals are
/// logged at `debug` and skipped.
#[cfg(target_arch = "wasm32")]
pub fn clear_non_member_storage() {
    use readybag_session::{VISITED_SESSION_KEY, non_member_keys_to_clear};

    let Some(window) = web_sys::window() else {
        return;
    };
    let (Ok(Some(local)), Ok(Some(session))) = (window.local_storage(), window.session_storage())
    else {
        tracing::warn!("Web storage unavailable, guest data not cleared");
        return;
    };

    let first_visit = matches!(session.get_item(VISITED_SESSION_KEY), Ok(None));
    let stored: Vec<String> = (0..local.length().unwrap_or(0))
        .filter_map(|i| local.key(i).ok().flatten())
        .collect();

    let keys = non_member_keys_to_clear(stored.iter().map(String::as_str), first_visit);
    for key in &keys {
        if let Err(e) = local.remove_item(key) {
            tracing::debug!(key = %key, error = ?e, "Failed to remove guest key");
        }
    }
    if first_visit {
        if let Err(e) = session.set_item(VISITED_SESSION_KEY, "true") {
            tracing::debug!(error = ?e, "Failed to mark session as visited");
        }
    }

    tracing::debug!(removed = keys.len(), first_visit, "Cleared guest storage");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_non_member_storage() {}
