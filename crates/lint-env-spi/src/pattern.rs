//! Path normalization and wildcard matching for exclusion rules.

/// Lexically normalizes a path for matching purposes.
///
/// Backslashes become forward slashes regardless of the host platform,
/// duplicate separators collapse, `.` segments are dropped, and `..`
/// segments consume their parent. Returns `None` when a `..` segment
/// would escape the root; such paths are invalid and never match.
///
/// # Examples
///
/// ```
/// use lint_env_spi::pattern::normalize;
///
/// assert_eq!(normalize("src/./main//Foo.java"), Some("src/main/Foo.java".into()));
/// assert_eq!(normalize("src\\main\\Foo.java"), Some("src/main/Foo.java".into()));
/// assert_eq!(normalize("/a/b/../c"), Some("/a/c".into()));
/// assert_eq!(normalize("../escape"), None);
/// ```
#[must_use]
pub fn normalize(path: &str) -> Option<String> {
    let unified = path.replace('\\', "/");
    let rooted = unified.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    let joined = segments.join("/");
    if rooted {
        Some(format!("/{joined}"))
    } else {
        Some(joined)
    }
}

/// Compares candidate paths against one stored reference pattern.
///
/// The reference is normalized with [`normalize`] and compiled as a glob:
/// `*` matches any run of characters (path separators included), `?`
/// matches exactly one. Matching is always against the full candidate
/// string, never a substring.
///
/// Wildcard semantics apply unconditionally: a reference that is meant as
/// a literal path but contains `*` or `?` is still treated as a pattern.
/// Callers that need literal matching must pre-escape the reference, e.g.
/// with [`glob::Pattern::escape`]. A reference that fails normalization or
/// does not compile as a glob never matches anything.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    pattern: Option<glob::Pattern>,
}

impl PathMatcher {
    /// Creates a matcher for `reference`.
    #[must_use]
    pub fn new(reference: &str) -> Self {
        let pattern = normalize(reference).and_then(|normalized| glob::Pattern::new(&normalized).ok());
        Self { pattern }
    }

    /// Whether `candidate` matches the stored reference.
    ///
    /// Empty candidates and candidates that fail normalization do not
    /// match.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let Some(pattern) = &self.pattern else {
            return false;
        };
        if candidate.is_empty() {
            return false;
        }
        let Some(candidate) = normalize(candidate) else {
            return false;
        };
        pattern.matches(&candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── normalize ──

    #[test]
    fn normalize_resolves_dot_segments() {
        assert_eq!(normalize("src/./a.rs"), Some("src/a.rs".to_string()));
        assert_eq!(normalize("src/x/../a.rs"), Some("src/a.rs".to_string()));
    }

    #[test]
    fn normalize_collapses_duplicate_separators() {
        assert_eq!(normalize("src//main///a.rs"), Some("src/main/a.rs".to_string()));
    }

    #[test]
    fn normalize_converts_backslashes() {
        assert_eq!(normalize("src\\main\\a.rs"), Some("src/main/a.rs".to_string()));
    }

    #[test]
    fn normalize_keeps_leading_slash() {
        assert_eq!(normalize("/home/user/a.rs"), Some("/home/user/a.rs".to_string()));
        assert_eq!(normalize("/a/../b"), Some("/b".to_string()));
    }

    #[test]
    fn normalize_rejects_escape_above_root() {
        assert_eq!(normalize("../a.rs"), None);
        assert_eq!(normalize("/.."), None);
        assert_eq!(normalize("a/../../b"), None);
    }

    // ── PathMatcher ──

    #[test]
    fn matches_literal_path() {
        let matcher = PathMatcher::new("src/main/Foo.java");
        assert!(matcher.matches("src/main/Foo.java"));
        assert!(!matcher.matches("src/main/Bar.java"));
    }

    #[test]
    fn matches_is_full_string_not_substring() {
        let matcher = PathMatcher::new("Foo.java");
        assert!(!matcher.matches("src/Foo.java"));
    }

    #[test]
    fn star_crosses_path_separators() {
        let matcher = PathMatcher::new("*Test.java");
        assert!(matcher.matches("src/test/FooTest.java"));
    }

    #[test]
    fn question_mark_matches_one_character() {
        let matcher = PathMatcher::new("src/?.rs");
        assert!(matcher.matches("src/a.rs"));
        assert!(!matcher.matches("src/ab.rs"));
    }

    #[test]
    fn candidate_is_normalized_before_matching() {
        let matcher = PathMatcher::new("src/main/*.java");
        assert!(matcher.matches("src/./main/Foo.java"));
        assert!(matcher.matches("src\\main\\Foo.java"));
    }

    #[test]
    fn reference_is_normalized_before_compiling() {
        let matcher = PathMatcher::new("src/gen/../main/*.java");
        assert!(matcher.matches("src/main/Foo.java"));
    }

    #[test]
    fn empty_candidate_never_matches() {
        let matcher = PathMatcher::new("*");
        assert!(!matcher.matches(""));
    }

    #[test]
    fn invalid_candidate_never_matches() {
        let matcher = PathMatcher::new("*");
        assert!(!matcher.matches("../outside"));
    }

    #[test]
    fn uncompilable_reference_never_matches() {
        // Unclosed character class is not a valid glob.
        let matcher = PathMatcher::new("src/[oops");
        assert!(!matcher.matches("src/[oops"));
    }

    #[test]
    fn invalid_reference_never_matches() {
        let matcher = PathMatcher::new("../*.java");
        assert!(!matcher.matches("a.java"));
    }

    #[test]
    fn escaped_reference_matches_literally() {
        let escaped = glob::Pattern::escape("src/a[1].rs");
        let matcher = PathMatcher::new(&escaped);
        assert!(matcher.matches("src/a[1].rs"));
    }
}
