//! Word label with document, sentence and position identity.

use crate::model::label::{HasIndex, HasWord, Label};
use crate::parser::parsing_error::ParsingError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Index value meaning "not set" for sentence and word positions.
const UNSET_INDEX: i32 = -1;

// =#========================================================================#=
// INDEXED WORD
// =#========================================================================$=
/// A word label identified by its position in a corpus.
///
/// Besides its text (value, word, tag, lemma), an [IndexedWord] knows the
/// document it stems from, the sentence within that document, and its
/// position within the sentence. A copy count distinguishes copies of the
/// same word (e.g. in graphs with duplicated nodes).
///
/// # Identity
/// Equality, hashing and ordering only consider `doc_id`, `sent_index`,
/// `index` and `copy_count`, never the text. Ordering puts
/// [`IndexedWord::no_word`] first, then compares document, sentence,
/// position, and copy count.
///
/// As a tree [Label], it supports both the [HasIndex] and [HasWord]
/// capabilities, so the reader assigns it leaf positions and word texts.
#[derive(Debug, Clone, Default)]
pub struct IndexedWord {
    value: String,
    word: Option<String>,
    tag: Option<String>,
    lemma: Option<String>,
    doc_id: Option<String>,
    sent_index: i32,
    index: i32,
    copy_count: usize,
}

impl IndexedWord {
    /// Creates a word at the given document, sentence and position,
    /// without any text.
    pub fn new(doc_id: Option<String>, sent_index: i32, index: i32) -> Self {
        Self {
            doc_id,
            sent_index,
            index,
            ..Default::default()
        }
    }

    /// The identifier pointing to no word.
    pub fn no_word() -> Self {
        Self::new(None, UNSET_INDEX, UNSET_INDEX)
    }

    /// Rejects building a word from an encoded string representation.
    ///
    /// # Errors
    /// Always returns an
    /// [UnsupportedOperation](crate::parser::ParsingErrorType::UnsupportedOperation)
    /// error.
    pub fn from_encoded(encoded: &str) -> Result<Self, ParsingError> {
        Err(ParsingError::unsupported_operation(format!(
            "cannot build an IndexedWord from encoded string {encoded:?}"
        )))
    }

    /// Returns a copy of this word with the given copy count.
    pub fn make_copy(&self, count: usize) -> Self {
        let mut copy = self.clone();
        copy.copy_count = count;
        copy
    }

    /// Returns one `'` per copy, e.g. `''` for the second copy.
    pub fn to_primes(&self) -> String {
        "'".repeat(self.copy_count)
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn set_tag(&mut self, tag: String) {
        self.tag = Some(tag);
    }

    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    pub fn set_lemma(&mut self, lemma: String) {
        self.lemma = Some(lemma);
    }

    pub fn doc_id(&self) -> Option<&str> {
        self.doc_id.as_deref()
    }

    pub fn set_doc_id(&mut self, doc_id: String) {
        self.doc_id = Some(doc_id);
    }

    pub fn sent_index(&self) -> i32 {
        self.sent_index
    }

    pub fn set_sent_index(&mut self, sent_index: i32) {
        self.sent_index = sent_index;
    }

    /// Returns the raw position, `-1` if never assigned.
    pub fn raw_index(&self) -> i32 {
        self.index
    }

    pub fn copy_count(&self) -> usize {
        self.copy_count
    }

    pub fn set_copy_count(&mut self, copy_count: usize) {
        self.copy_count = copy_count;
    }

    fn is_no_word(&self) -> bool {
        *self == Self::no_word()
    }
}

// ============================================================================
// Label capabilities
// ============================================================================
impl Label for IndexedWord {
    fn from_value(value: String) -> Self {
        Self {
            value,
            sent_index: UNSET_INDEX,
            index: UNSET_INDEX,
            ..Default::default()
        }
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn as_has_index_mut(&mut self) -> Option<&mut dyn HasIndex> {
        Some(self)
    }

    fn as_has_word_mut(&mut self) -> Option<&mut dyn HasWord> {
        Some(self)
    }

    fn index(&self) -> Option<usize> {
        usize::try_from(self.index).ok()
    }
}

impl HasIndex for IndexedWord {
    fn set_index(&mut self, index: usize) {
        self.index = i32::try_from(index).unwrap_or(i32::MAX);
    }
}

impl HasWord for IndexedWord {
    fn set_word(&mut self, word: String) {
        self.word = Some(word);
    }
}

// ============================================================================
// Identity: Eq, Hash, Ord
// ============================================================================
impl PartialEq for IndexedWord {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.sent_index == other.sent_index
            && self.doc_id == other.doc_id
            && self.copy_count == other.copy_count
    }
}

impl Eq for IndexedWord {}

impl Hash for IndexedWord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.doc_id.hash(state);
        self.sent_index.hash(state);
        self.index.hash(state);
    }
}

impl PartialOrd for IndexedWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexedWord {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_no_word(), other.is_no_word()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        self.doc_id
            .cmp(&other.doc_id)
            .then(self.sent_index.cmp(&other.sent_index))
            .then(self.index.cmp(&other.index))
            .then(self.copy_count.cmp(&other.copy_count))
    }
}

impl fmt::Display for IndexedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}/{}", self.value, tag),
            None => write!(f, "{}", self.value),
        }
    }
}
