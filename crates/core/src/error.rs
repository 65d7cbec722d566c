//! Error types for the core crate

use thiserror::Error;

/// Errors raised while parsing a single log row
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    /// The row carried no fields at all (blank line or only delimiters)
    #[error("row has no fields")]
    Empty,

    /// The index field is empty, as in `,1.1,2.2`
    #[error("row has an empty index field")]
    MissingIndex,

    /// The row width does not match the mnemonic list
    #[error("row has {actual} fields but the mnemonic list names {expected}")]
    WidthMismatch {
        /// Number of mnemonics
        expected: usize,
        /// Number of fields in the row
        actual: usize,
    },
}

/// A [`RowError`] located at a position within a row set
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed log row {row}: {source}")]
pub struct MalformedRow {
    /// Zero-based position of the row in its row set
    pub row: usize,
    /// What was wrong with the row
    #[source]
    pub source: RowError,
}

impl MalformedRow {
    /// Locate `source` at `row`
    pub fn new(row: usize, source: RowError) -> Self {
        Self { row, source }
    }
}

/// Errors raised while parsing schema or object tags
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognized schema version tag
    #[error("unknown WITSML schema version: {0:?}")]
    UnknownSchemaVersion(String),

    /// Unrecognized data object type
    #[error("unknown WITSML object type: {0:?}")]
    UnknownObjectType(String),
}
