//! Utility functions for token unescaping in Penn Treebank files.
//!
//! Older treebank releases escape `*` and `/` inside labels and terminals
//! with a backslash (e.g. `\*T\*-1`, `1\/2`). The reader removes these
//! escapes so that trees built from escaped and unescaped files agree.

/// Escaped star, replaced by `*`.
const ESCAPED_STAR: &str = r"\*";
/// Escaped slash, replaced by `/`.
const ESCAPED_SLASH: &str = r"\/";

/// Replaces every `\*` with `*` and every `\/` with `/`.
///
/// No other characters are altered; a lone backslash stays as is.
///
/// # Examples
/// ```
/// # use penntree::parser::utils::unescape_token;
/// assert_eq!(unescape_token(r"\*T\*-1"), "*T*-1");
/// assert_eq!(unescape_token(r"1\/2"), "1/2");
/// assert_eq!(unescape_token(r"a\b"), r"a\b");
/// assert_eq!(unescape_token("NP-SBJ"), "NP-SBJ");
/// ```
pub fn unescape_token(token: &str) -> String {
    if !token.contains('\\') {
        return token.to_string();
    }
    token.replace(ESCAPED_STAR, "*").replace(ESCAPED_SLASH, "/")
}

/// Returns whether `token` starts with `prefix`, treating `None` as no match.
pub(crate) fn starts_with(token: Option<&str>, prefix: &str) -> bool {
    token.is_some_and(|t| t.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_both_in_one_token() {
        assert_eq!(unescape_token(r"\*\/\*"), "*/*");
    }

    #[test]
    fn test_unescape_double_backslash() {
        // `\\*` keeps the first backslash, the second one escapes the star
        assert_eq!(unescape_token(r"\\*"), r"\*");
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with(Some("*x*x*x header"), "*x*x*x"));
        assert!(!starts_with(Some("(S"), "*x*x*x"));
        assert!(!starts_with(None, "*x*x*x"));
    }
}
