use crate::detokenize::{DetokenizationOperation, Detokenizer};
use std::collections::{HashMap, HashSet};

/// Detokenizer looking up tokens in a dictionary of operations.
///
/// Tokens missing from the dictionary get
/// [NoOperation](DetokenizationOperation::NoOperation).
#[derive(Debug, Clone)]
pub struct DictionaryDetokenizer {
    operations: HashMap<String, DetokenizationOperation>,
}

impl DictionaryDetokenizer {
    /// Creates a detokenizer with a dictionary for English punctuation,
    /// contractions and currency symbols.
    pub fn new() -> Self {
        use DetokenizationOperation::*;

        let entries = [
            // Punctuation
            (".", MergeToLeft),
            ("...", MergeToLeft),
            (",", MergeToLeft),
            ("!", MergeToLeft),
            ("?", MergeToLeft),
            (";", MergeToLeft),
            ("(", MergeToRight),
            (")", MergeToLeft),
            ("[", MergeToRight),
            ("]", MergeToLeft),
            ("\"", RightLeftMatching),
            ("-", MergeBothIfSurroundedByWords),
            // Contractions
            ("'t", MergeToLeft),
            ("'m", MergeToLeft),
            ("'s", MergeToLeft),
            ("'re", MergeToLeft),
            ("'ve", MergeToLeft),
            ("'d", MergeToLeft),
            ("'ll", MergeToLeft),
            // Currencies
            ("$", MergeToRight),
            ("€", MergeToLeft),
        ];

        Self::with_dictionary(entries.into_iter().map(|(token, op)| (token.to_string(), op)).collect())
    }

    /// Creates a detokenizer with a custom dictionary.
    pub fn with_dictionary(operations: HashMap<String, DetokenizationOperation>) -> Self {
        Self { operations }
    }

    /// Returns the dictionary operation of `token`, if any.
    pub fn operation(&self, token: &str) -> Option<DetokenizationOperation> {
        self.operations.get(token).copied()
    }
}

impl Default for DictionaryDetokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Detokenizer for DictionaryDetokenizer {
    fn detokenize(&self, tokens: &[&str]) -> Vec<DetokenizationOperation> {
        use DetokenizationOperation::*;

        // Matching tokens currently open, waiting for their closing occurrence
        let mut open_matching: HashSet<&str> = HashSet::new();

        tokens
            .iter()
            .enumerate()
            .map(|(i, &token)| match self.operation(token) {
                None | Some(NoOperation) => NoOperation,
                Some(op @ (MergeToLeft | MergeToRight | MergeBoth)) => op,
                Some(MergeBothIfSurroundedByWords) => {
                    let surrounded = i > 0
                        && i + 1 < tokens.len()
                        && is_word(tokens[i - 1])
                        && is_word(tokens[i + 1]);
                    if surrounded { MergeBoth } else { NoOperation }
                }
                Some(RightLeftMatching) => {
                    if open_matching.remove(token) {
                        MergeToLeft
                    } else {
                        open_matching.insert(token);
                        MergeToRight
                    }
                }
            })
            .collect()
    }
}

/// Returns whether `token` is non-empty and consists of word characters only
/// (alphanumeric or `_`).
fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use DetokenizationOperation::*;

    #[test]
    fn test_is_word() {
        assert!(is_word("well"));
        assert!(is_word("x_1"));
        assert!(is_word("naïve"));
        assert!(!is_word(""));
        assert!(!is_word("well-known"));
        assert!(!is_word(","));
    }

    #[test]
    fn test_hyphen_needs_words_on_both_sides() {
        let detokenizer = DictionaryDetokenizer::new();
        assert_eq!(detokenizer.detokenize(&["well", "-", "known"]), vec![NoOperation, MergeBoth, NoOperation]);
        assert_eq!(detokenizer.detokenize(&["-", "known"]), vec![NoOperation, NoOperation]);
        assert_eq!(detokenizer.detokenize(&["well", "-"]), vec![NoOperation, NoOperation]);
        assert_eq!(detokenizer.detokenize(&[",", "-", "known"]), vec![MergeToLeft, NoOperation, NoOperation]);
    }

    #[test]
    fn test_custom_dictionary() {
        let dictionary = HashMap::from([("'".to_string(), RightLeftMatching), ("@".to_string(), MergeBoth)]);
        let detokenizer = DictionaryDetokenizer::with_dictionary(dictionary);
        assert_eq!(detokenizer.operation("."), None);
        assert_eq!(
            detokenizer.detokenize(&["'", "a", "'", "b", "@", "c", "."]),
            vec![MergeToRight, NoOperation, MergeToLeft, NoOperation, MergeBoth, NoOperation, NoOperation]
        );
    }
}
