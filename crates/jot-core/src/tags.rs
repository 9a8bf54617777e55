//! Tag name normalization.
//!
//! Tag names are compared and stored in normalized form: trimmed of
//! surrounding whitespace and lower-cased. Blank names are discarded.

/// Normalize a single tag name.
///
/// Returns `None` for names that are empty after trimming.
pub fn normalize_tag(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Normalize a list of tag names: trim, lower-case, drop blanks, and
/// deduplicate while preserving first-occurrence order.
pub fn normalize_tags<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();
    for name in names {
        if let Some(normalized) = normalize_tag(name.as_ref()) {
            if seen.insert(normalized.clone()) {
                result.push(normalized);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_tag("  Rust "), Some("rust".to_string()));
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("   "), None);
        assert_eq!(normalize_tag("\t\n"), None);
    }

    #[test]
    fn test_normalize_tags_dedups_case_insensitively() {
        // "A" and " a " collapse to one entry
        let tags = normalize_tags(["A", " a ", "b"]);
        assert_eq!(tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_normalize_tags_preserves_first_occurrence_order() {
        let tags = normalize_tags(["zebra", "Alpha", "ZEBRA", "mid"]);
        assert_eq!(tags, vec!["zebra", "alpha", "mid"]);
    }

    #[test]
    fn test_normalize_tags_drops_blanks() {
        let tags = normalize_tags(["", "  ", "ok"]);
        assert_eq!(tags, vec!["ok"]);
    }

    #[test]
    fn test_normalize_tags_empty_input() {
        let tags = normalize_tags(Vec::<String>::new());
        assert!(tags.is_empty());
    }
}
