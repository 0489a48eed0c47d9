//! Selecting browser storage keys to clear for guests.
//!
//! Guests can save products and travel dates locally. Once the identity
//! check resolves with no member, that data is dropped so it never leaks
//! between visitors sharing a browser.

/// Session-storage flag marking that this browser session already ran
/// the first-visit cleanup.
pub const VISITED_SESSION_KEY: &str = "hasVisitedBefore";

/// Prefixes of local-storage keys holding guest data.
const GUEST_KEY_PREFIXES: [&str; 2] = ["userProducts_", "travelDates_"];

/// Fixed keys dropped on the first visit of a browser session.
const FIRST_VISIT_KEYS: [&str; 5] = [
    "savedTravelDates",
    "selectedTravelDateId",
    "userProducts_japan",
    "userProducts_korea",
    "userProducts_china",
];

/// Returns the local-storage keys to remove for a guest.
///
/// `stored_keys` are the keys currently in local storage. On the first
/// visit of a session the fixed first-visit keys are added even when
/// absent, since removing a missing key is harmless. The result has no
/// duplicates and keeps first-seen order.
#[must_use]
pub fn non_member_keys_to_clear<'a, I>(stored_keys: I, first_visit: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keys: Vec<String> = Vec::new();
    let mut push = |key: &str| {
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    };

    if first_visit {
        for key in FIRST_VISIT_KEYS {
            push(key);
        }
    }

    stored_keys
        .into_iter()
        .filter(|key| GUEST_KEY_PREFIXES.iter().any(|p| key.starts_with(p)))
        .for_each(push);

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_prefixed_guest_keys_only() {
        let stored = ["userProducts_japan", "travelDates_2024", "saveEmail", "theme"];
        let keys = non_member_keys_to_clear(stored, false);
        assert_eq!(keys, vec!["userProducts_japan", "travelDates_2024"]);
    }

    #[test]
    fn first_visit_adds_fixed_keys_without_duplicates() {
        let stored = ["userProducts_japan", "userProducts_thai"];
        let keys = non_member_keys_to_clear(stored, true);

        assert_eq!(keys.len(), 6);
        assert_eq!(keys[0], "savedTravelDates");
        assert!(keys.contains(&"userProducts_thai".to_string()));
        assert_eq!(
            keys.iter().filter(|k| *k == "userProducts_japan").count(),
            1
        );
    }

    #[test]
    fn empty_storage_on_repeat_visit_clears_nothing() {
        assert!(non_member_keys_to_clear([], false).is_empty());
    }
}
