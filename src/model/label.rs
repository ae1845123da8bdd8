//! Labels carried by tree nodes and the optional capabilities a label may offer.
//!
//! Every node label implements [Label]. Beyond its text value, a label can
//! expose two optional capabilities that the reader fills in for leaves:
//! - [HasIndex]: a settable 1-based position of the leaf in its tree
//! - [HasWord]: a settable word text
//!
//! Capabilities are queried per label via [`Label::as_has_index_mut`] and
//! [`Label::as_has_word_mut`]; a label type opts in by overriding them.
//! Plain [String] labels offer neither.

use crate::parser::parsing_error::ParsingError;
use std::fmt::Debug;

// =#========================================================================#=
// LABEL (trait)
// =#========================================================================$=
/// Text label of a tree node.
pub trait Label: Clone + Debug {
    /// Creates a label holding `value` and nothing else.
    fn from_value(value: String) -> Self;

    /// Returns the text value of this label.
    fn value(&self) -> &str;

    /// Replaces the text value of this label.
    fn set_value(&mut self, value: String);

    /// Returns the [HasIndex] capability of this label, if it has one.
    fn as_has_index_mut(&mut self) -> Option<&mut dyn HasIndex> {
        None
    }

    /// Returns the [HasWord] capability of this label, if it has one.
    fn as_has_word_mut(&mut self) -> Option<&mut dyn HasWord> {
        None
    }

    /// Returns the assigned position, if this label tracks one and it is set.
    fn index(&self) -> Option<usize> {
        None
    }

    /// Rebuilds this label from an encoded string representation.
    ///
    /// Labels are only ever built token by token, so this is rejected with
    /// an [UnsupportedOperation](crate::parser::ParsingErrorType::UnsupportedOperation)
    /// error and the label is left unchanged.
    fn set_from_string(&mut self, encoded: &str) -> Result<(), ParsingError> {
        Err(ParsingError::unsupported_operation(format!(
            "cannot rebuild a label from string {encoded:?}"
        )))
    }
}

/// Capability of a label to carry the 1-based position of its leaf.
pub trait HasIndex {
    /// Sets the position.
    fn set_index(&mut self, index: usize);
}

/// Capability of a label to carry a word text separate from its value.
pub trait HasWord {
    /// Sets the word text.
    fn set_word(&mut self, word: String);
}

impl Label for String {
    fn from_value(value: String) -> Self {
        value
    }

    fn value(&self) -> &str {
        self.as_str()
    }

    fn set_value(&mut self, value: String) {
        *self = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsingErrorType;

    #[test]
    fn test_string_label_has_no_capabilities() {
        let mut label = String::from_value("NP".to_string());
        assert_eq!(label.value(), "NP");
        assert!(label.as_has_index_mut().is_none());
        assert!(label.as_has_word_mut().is_none());
        assert_eq!(label.index(), None);

        label.set_value("VP".to_string());
        assert_eq!(label.value(), "VP");
    }

    #[test]
    fn test_string_label_rejects_encoded_form() {
        let mut label = String::from_value("NP".to_string());
        let err = label.set_from_string("(NP (NN x))").unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::UnsupportedOperation(_)));
        assert_eq!(label.value(), "NP");
    }
}
