//! Slug generation for export file names.
//!
//! Titles are free-form text; export file names must be lowercase,
//! hyphenated and safe for any filesystem.

/// Token used when a title normalizes to nothing.
pub const DEFAULT_SLUG: &str = "post";

/// Normalize a title into a `[a-z0-9-]` identifier.
///
/// Every maximal run of characters outside `[a-z0-9]` collapses into a
/// single hyphen, with no leading or trailing hyphen. Non-ASCII characters
/// are stripped rather than transliterated, so `"Olá Mundo!"` becomes
/// `"ol-mundo"`. Falls back to [`DEFAULT_SLUG`] when nothing survives.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}

/// File name used when exporting a draft: `<slug>.md`.
pub fn export_file_name(title: &str) -> String {
    format!("{}.md", slugify(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_falls_back() {
        assert_eq!(slugify(""), "post");
        assert_eq!(slugify("   "), "post");
        assert_eq!(slugify("!!!"), "post");
    }

    #[test]
    fn test_accented_characters_are_stripped() {
        assert_eq!(slugify("Olá Mundo!"), "ol-mundo");
    }

    #[test]
    fn test_digits_and_hyphens_survive() {
        assert_eq!(slugify("CVE-2024-1234"), "cve-2024-1234");
    }

    #[test]
    fn test_runs_collapse_to_single_hyphen() {
        assert_eq!(slugify("My   Post -- draft #2"), "my-post-draft-2");
    }

    #[test]
    fn test_no_leading_or_trailing_hyphen() {
        assert_eq!(slugify("  My Post  "), "my-post");
        assert_eq!(slugify("-My Post-"), "my-post");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("My Post"), "my-post.md");
        assert_eq!(export_file_name(""), "post.md");
    }
}
