//! Common helpers shared across the queue types.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extension appended to sound names that carry none.
pub const DEFAULT_EXTENSION: &str = ".SND";

/// Index of one fixed-size region of the cache arena.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(pub usize);

impl SlotId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// Normalize a sound name so it always carries an extension.
///
/// `"BUMP"` becomes `"BUMP.SND"`; names that already contain a dot are kept
/// as they are.
pub fn normalize_name(name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{name}{DEFAULT_EXTENSION}")
    }
}

/// The part of a name before its extension.
pub fn name_stem(name: &str) -> &str {
    name.split_once('.').map_or(name, |(stem, _)| stem)
}

/// Test whether `text` matches a wildcard `pattern`.
///
/// `?` matches exactly one character and `*` matches any run of characters,
/// including none. Matching is case-sensitive.
pub fn matches_pattern(pattern: &str, text: &str) -> bool {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();

    let mut pi = 0;
    let mut ti = 0;
    // Position of the last `*` seen and the text index it was tried against.
    let mut backtrack: Option<(usize, usize)> = None;

    while ti < text.len() {
        match pattern.get(pi) {
            Some(b'*') => {
                backtrack = Some((pi, ti));
                pi += 1;
            }
            Some(&ch) if ch == b'?' || ch == text[ti] => {
                pi += 1;
                ti += 1;
            }
            _ => match backtrack {
                Some((star, matched)) => {
                    pi = star + 1;
                    ti = matched + 1;
                    backtrack = Some((star, matched + 1));
                }
                None => return false,
            },
        }
    }

    pattern[pi..].iter().all(|&ch| ch == b'*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("BUMP"), "BUMP.SND");
        assert_eq!(normalize_name("BUMP.SND"), "BUMP.SND");
        assert_eq!(normalize_name("LIB012.LNK"), "LIB012.LNK");
    }

    #[test]
    fn test_name_stem() {
        assert_eq!(name_stem("NISSND1.SND"), "NISSND1");
        assert_eq!(name_stem("NISSND1"), "NISSND1");
    }

    #[test]
    fn test_matches_single_char_wildcard() {
        assert!(matches_pattern("NISSND?", "NISSND1"));
        assert!(matches_pattern("NISSND?", "NISSNDA"));
        assert!(!matches_pattern("NISSND?", "NISSND"));
        assert!(!matches_pattern("NISSND?", "NISSND12"));
        assert!(!matches_pattern("NISSND?", "nissnd1"));
    }

    #[test]
    fn test_matches_star_wildcard() {
        assert!(matches_pattern("*.SND", "BUMP.SND"));
        assert!(matches_pattern("B*P*", "BUMP.SND"));
        assert!(matches_pattern("*", ""));
        assert!(!matches_pattern("*.LNK", "BUMP.SND"));
    }

    proptest! {
        #[test]
        fn prop_name_matches_itself_and_masks(name in "[A-Z0-9]{1,8}") {
            prop_assert!(matches_pattern(&name, &name));
            prop_assert!(matches_pattern("*", &name));

            let masked: String = "?".repeat(name.len());
            prop_assert!(matches_pattern(&masked, &name));
            let too_long = format!("{masked}?");
            prop_assert!(!matches_pattern(&too_long, &name));
        }

        #[test]
        fn prop_normalize_is_idempotent(name in "[A-Z0-9]{1,8}(\\.[A-Z]{3})?") {
            let once = normalize_name(&name);
            prop_assert_eq!(normalize_name(&once), once.clone());
            prop_assert!(once.contains('.'));
        }
    }
}
