//! Property-based tests for slug generation
//!
//! Uses proptest to verify the invariants every export file name relies on.

use proptest::prelude::*;

use mdraft_core::slug::{slugify, DEFAULT_SLUG};

/// Arbitrary titles: any printable junk a user might type or paste
fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,200}").expect("valid regex")
}

proptest! {
    /// Output only ever contains lowercase ASCII alphanumerics and hyphens
    #[test]
    fn slug_alphabet_is_closed(title in title_strategy()) {
        let slug = slugify(&title);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    /// No leading or trailing hyphen, and no empty output
    #[test]
    fn slug_is_trimmed_and_nonempty(title in title_strategy()) {
        let slug = slugify(&title);
        prop_assert!(!slug.is_empty());
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
    }

    /// Hyphen runs never survive normalization
    #[test]
    fn slug_has_no_double_hyphen(title in title_strategy()) {
        prop_assert!(!slugify(&title).contains("--"));
    }

    /// Slugging is idempotent
    #[test]
    fn slug_is_idempotent(title in title_strategy()) {
        let once = slugify(&title);
        prop_assert_eq!(slugify(&once), once);
    }

    /// Titles with no alphanumeric content always fall back
    #[test]
    fn non_alphanumeric_titles_fall_back(title in prop::string::string_regex("[^a-zA-Z0-9]{0,40}").expect("valid regex")) {
        prop_assert_eq!(slugify(&title), DEFAULT_SLUG);
    }
}
