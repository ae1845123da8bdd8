//! Detokenization: joining tokens (e.g. the yield of a parse tree) back
//! into running text.
//!
//! A [Detokenizer] assigns each token a [DetokenizationOperation] telling
//! whether it attaches to its left or right neighbour. From those,
//! [`Detokenizer::detokenize_to_string`] decides where spaces go.
//!
//! # Example
//! ```
//! use penntree::detokenize::{Detokenizer, DictionaryDetokenizer};
//!
//! let detokenizer = DictionaryDetokenizer::new();
//! let text = detokenizer.detokenize_to_string(&["He", "said", "\"", "hi", "\"", "."], None);
//! assert_eq!(text, "He said \"hi\".");
//! ```

mod dictionary;

pub use self::dictionary::DictionaryDetokenizer;

/// How a token attaches to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetokenizationOperation {
    /// Attach to the previous token, e.g. `.`
    MergeToLeft,
    /// Attach to the next token, e.g. `(`
    MergeToRight,
    /// Attach to both neighbours
    MergeBoth,
    /// [MergeBoth](Self::MergeBoth) if both neighbours are words, e.g. `-`
    /// in `well - known`; only used in dictionaries
    MergeBothIfSurroundedByWords,
    /// Alternately opens and closes, e.g. `"`: the first occurrence attaches
    /// right, the next one left; only used in dictionaries
    RightLeftMatching,
    /// Stand alone, separated by spaces
    NoOperation,
}

impl DetokenizationOperation {
    /// Returns whether a token with this operation takes no space to its left.
    fn merges_left(self) -> bool {
        matches!(self, Self::MergeToLeft | Self::MergeBoth)
    }

    /// Returns whether a token with this operation takes no space to its right.
    fn merges_right(self) -> bool {
        matches!(self, Self::MergeToRight | Self::MergeBoth)
    }
}

/// Assigns detokenization operations to tokens.
pub trait Detokenizer {
    /// Returns one operation per token.
    ///
    /// Returned operations are never
    /// [MergeBothIfSurroundedByWords](DetokenizationOperation::MergeBothIfSurroundedByWords)
    /// or [RightLeftMatching](DetokenizationOperation::RightLeftMatching);
    /// those are resolved against the neighbouring tokens.
    fn detokenize(&self, tokens: &[&str]) -> Vec<DetokenizationOperation>;

    /// Joins `tokens` into a string.
    ///
    /// Tokens are separated by a space, unless the next token merges left
    /// or the current one merges right. Where the space is dropped,
    /// `split_marker` is inserted instead, if given.
    fn detokenize_to_string(&self, tokens: &[&str], split_marker: Option<&str>) -> String {
        let operations = self.detokenize(tokens);
        let mut text = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());

        for (i, token) in tokens.iter().enumerate() {
            text.push_str(token);

            let Some(next) = operations.get(i + 1) else {
                break;
            };
            if next.merges_left() || operations[i].merges_right() {
                if let Some(marker) = split_marker {
                    text.push_str(marker);
                }
            } else {
                text.push(' ');
            }
        }

        text
    }
}
