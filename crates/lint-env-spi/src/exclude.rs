//! Per-checker exclusion rules parsed from flat `"checker:pattern"` entries.

use std::collections::BTreeSet;

/// Extracts the exclusion patterns configured for one checker.
///
/// Each entry is split on its first `:`; the right-hand side is included
/// when the left-hand side equals `checker`. Entries without a `:` carry
/// no pattern for any checker and are skipped silently. The result is
/// recomputed from the entries on every call and is empty, never an
/// error, when nothing matches.
///
/// # Examples
///
/// ```
/// use lint_env_spi::exclude;
///
/// let entries = vec![
///     "checkstyle:src/generated/*".to_string(),
///     "pmd:Foo*".to_string(),
/// ];
/// let patterns = exclude::patterns(&entries, "checkstyle");
/// assert!(patterns.contains("src/generated/*"));
/// assert!(exclude::patterns(&entries, "other").is_empty());
/// ```
#[must_use]
pub fn patterns(entries: &[String], checker: &str) -> BTreeSet<String> {
    entries
        .iter()
        .filter_map(|entry| entry.split_once(':'))
        .filter(|(id, _)| *id == checker)
        .map(|(_, pattern)| pattern.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn splits_entries_by_checker_id() {
        let entries = entries(&["checkstyle:.*Test\\.java", "pmd:Foo.*"]);

        let checkstyle = patterns(&entries, "checkstyle");
        assert_eq!(checkstyle.len(), 1);
        assert!(checkstyle.contains(".*Test\\.java"));

        let pmd = patterns(&entries, "pmd");
        assert_eq!(pmd.len(), 1);
        assert!(pmd.contains("Foo.*"));
    }

    #[test]
    fn unknown_checker_yields_empty_set() {
        let entries = entries(&["checkstyle:a", "pmd:b"]);
        assert!(patterns(&entries, "other").is_empty());
    }

    #[test]
    fn entry_without_colon_is_skipped() {
        let entries = entries(&["not-an-entry", "pmd:b"]);
        assert!(patterns(&entries, "not-an-entry").is_empty());
        assert_eq!(patterns(&entries, "pmd").len(), 1);
    }

    #[test]
    fn splits_on_first_colon_only() {
        let entries = entries(&["pmd:src:weird/*"]);
        assert!(patterns(&entries, "pmd").contains("src:weird/*"));
    }

    #[test]
    fn trailing_colon_keeps_empty_pattern() {
        let entries = entries(&["pmd:"]);
        let set = patterns(&entries, "pmd");
        assert_eq!(set.len(), 1);
        assert!(set.contains(""));
    }

    #[test]
    fn duplicate_patterns_collapse_into_set() {
        let entries = entries(&["pmd:a", "pmd:a", "pmd:b"]);
        assert_eq!(patterns(&entries, "pmd").len(), 2);
    }

    #[test]
    fn empty_entry_list_yields_empty_set() {
        assert!(patterns(&[], "pmd").is_empty());
    }
}
