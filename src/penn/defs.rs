//! Constants for reading Penn Treebank files.

/// Prefix of the header tokens still present in some corpus files
/// (e.g. the Brown section of Treebank 3).
pub(crate) const LEGACY_HEADER_PREFIX: &str = "*x*x*x";

/// Number of header tokens that close a legacy header.
pub(crate) const LEGACY_HEADER_TOKEN_COUNT: usize = 4;
