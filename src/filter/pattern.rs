//! Pattern compilation.
//!
//! Patterns are compiled once at construction so the per-request cost is
//! matching only. Compilation is fail-fast: the first invalid pattern aborts
//! the whole list.

use regex::Regex;

use crate::error::PatternError;

/// Compile an ordered list of pattern strings into matchers, preserving order.
///
/// Returns an error naming the first pattern that fails to compile; later
/// patterns are not attempted. An empty input yields an empty matcher list.
pub fn compile(patterns: &[String]) -> Result<Vec<Regex>, PatternError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| PatternError {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_compiles_to_nothing() {
        assert!(compile(&[]).unwrap().is_empty());
    }

    #[test]
    fn compiles_in_input_order() {
        let matchers = compile(&["^/foo/(.*)".to_string(), "/test".to_string()]).unwrap();
        assert_eq!(matchers.len(), 2);
        assert!(matchers[0].is_match("/foo/bar"));
        assert!(!matchers[0].is_match("/test"));
        assert!(matchers[1].is_match("/test"));
    }

    #[test]
    fn fails_fast_on_first_invalid_pattern() {
        let err = compile(&[
            "^/ok".to_string(),
            "*".to_string(),
            "[also-broken".to_string(),
        ])
        .unwrap_err();
        assert_eq!(err.pattern, "*");
    }

    #[test]
    fn error_names_offending_pattern() {
        let err = compile(&["*".to_string()]).unwrap_err();
        assert!(err.to_string().contains("\"*\""));
    }
}
