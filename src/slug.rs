//! Slug Derivation
//!
//! Turns free-text tag titles into the URL-safe slugs the gateway stores.

/// Derive a URL-safe slug from a tag title.
///
/// Accented characters fold to ASCII, everything lowercases, symbols are
/// dropped and whitespace runs become single hyphens. Leading/trailing
/// whitespace is trimmed rather than kept as boundary hyphens. Underscores
/// count as separators and become hyphens. Pure and total: empty input
/// yields an empty slug.
pub fn derive_slug(title: &str) -> String {
    slug::slugify(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_symbols() {
        assert_eq!(derive_slug("São Paulo!"), "sao-paulo");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(derive_slug("  multiple   spaces  "), "multiple-spaces");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(derive_slug("Rust Videos"), "rust-videos");
    }

    #[test]
    fn test_underscores_become_hyphens() {
        assert_eq!(derive_slug("c_plus_plus"), "c-plus-plus");
    }

    #[test]
    fn test_idempotent_on_valid_slugs() {
        for valid in ["sao-paulo", "rust", "a-b-c-123"] {
            assert_eq!(derive_slug(valid), valid);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_slug() {
        assert_eq!(derive_slug(""), "");
    }
}
