//! Property-based tests for the nickname acceptance rule.

use linkbio_core::{accept_nickname, ProfileState, RefreshOutcome, MAX_NICKNAME_LEN};
use proptest::prelude::*;

/// Any string, padded with arbitrary leading/trailing whitespace and byte order marks.
fn padded_strategy() -> impl Strategy<Value = (String, String, String)> {
    (
        prop::string::string_regex("[ \t\n\u{3000}\u{FEFF}]{0,5}").expect("valid regex"),
        prop::string::string_regex(".{0,80}").expect("valid regex"),
        prop::string::string_regex("[ \t\n\u{3000}\u{FEFF}]{0,5}").expect("valid regex"),
    )
}

/// `String.prototype.trim`: ECMAScript whitespace and line terminators.
fn trim_like_browser(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
}

proptest! {
    /// Accepted iff the trimmed text has 1..=49 UTF-16 units, and then it is the trimmed text
    #[test]
    fn acceptance_matches_trimmed_length((pre, core, post) in padded_strategy()) {
        let raw = format!("{}{}{}", pre, core, post);
        let trimmed = trim_like_browser(&raw);
        let len = trimmed.encode_utf16().count();

        match accept_nickname(&raw) {
            Ok(name) => {
                prop_assert_eq!(name, trimmed);
                prop_assert!((1..MAX_NICKNAME_LEN).contains(&len));
            }
            Err(_) => prop_assert!(len == 0 || len >= MAX_NICKNAME_LEN),
        }
    }

    /// Applying an outcome never touches the avatar and never empties the name
    #[test]
    fn apply_keeps_invariants(raw in ".{0,80}") {
        let mut state = ProfileState::default();
        let outcome = match accept_nickname(&raw) {
            Ok(name) => RefreshOutcome::Updated(name.to_string()),
            Err(reason) => RefreshOutcome::Rejected(reason),
        };
        outcome.apply(&mut state);

        prop_assert_eq!(state.avatar_url, ProfileState::default().avatar_url);
        prop_assert!(!state.display_name.is_empty());
    }
}
