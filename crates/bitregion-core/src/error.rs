//! Error types for bitregion-core
//!
//! Region operations are permissive by construction: out-of-range cells are
//! ignored and mismatched regions clip to their overlap. The only fallible
//! paths are grid construction from ragged input and parsing the text form.

use thiserror::Error;

/// bitregion error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A column of a `[x][y]` grid has a different length than the first one
    #[error("ragged grid: column {column} has {actual} cells, expected {expected}")]
    RaggedGrid {
        column: usize,
        expected: usize,
        actual: usize,
    },

    /// A required field of the serialized form is absent
    #[error("missing field in serialized region: {0}")]
    MissingField(&'static str),

    /// A field of the serialized form is not a valid number
    #[error("cannot parse {field} from {value:?}")]
    Parse { field: &'static str, value: String },

    /// The declared dimensions need more words than can be addressed
    #[error("dimensions too large: {width}x{height}")]
    Dimensions { width: usize, height: usize },

    /// The serialized word count does not match the declared dimensions
    #[error("word count mismatch: expected {expected}, got {actual}")]
    WordCount { expected: usize, actual: usize },
}

/// Result type alias for bitregion operations
pub type Result<T> = std::result::Result<T, Error>;
