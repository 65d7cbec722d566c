//! Unified error type for the valve.
//!
//! Each crate raises its own error enum; this module folds them into one
//! [`Error`] so callers of the facade match on a single type.

use thiserror::Error;
use valve_config::ConfigError;
use valve_core::{MalformedRow, ParseError, SchemaVersion};
use valve_wire::{FragmentPart, MergeError, TranscodeError};

use crate::valve::RenderError;

/// All valve errors.
///
/// Every variant describes a problem with the input at hand. Nothing here
/// is transient, so no variant is retryable.
#[derive(Debug, Error)]
pub enum Error {
    /// A log data row was empty or did not match the mnemonic list
    #[error(transparent)]
    MalformedRow(MalformedRow),

    /// A rendered fragment did not carry the expected declaration or root tags
    #[error("fragment {index} does not match the expected {part}")]
    FragmentShapeMismatch {
        /// Zero-based position of the fragment
        index: usize,
        /// Which part failed to match
        part: FragmentPart,
    },

    /// Operation not available at this schema version
    #[error("unsupported schema version: {0}")]
    UnsupportedVersion(SchemaVersion),

    /// Unrecognized schema version or object type
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The external renderer failed on one object
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Options could not be loaded
    #[error("configuration error: {0}")]
    Config(String),

    /// Payload envelope could not be serialized
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for valve operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Always false; valve errors are properties of the input.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Check if the caller handed over data the valve cannot shape.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::MalformedRow(_)
                | Error::FragmentShapeMismatch { .. }
                | Error::InvalidArgument(_)
        )
    }

    /// Check if this is an internal error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

impl From<TranscodeError> for Error {
    fn from(e: TranscodeError) -> Self {
        match e {
            TranscodeError::MalformedRow(row) => Error::MalformedRow(row),
            TranscodeError::Unbalanced(msg) => Error::Internal(format!("unbalanced array: {}", msg)),
            TranscodeError::Serialization(msg) => Error::Serialization(msg),
        }
    }
}

impl From<MergeError> for Error {
    fn from(e: MergeError) -> Self {
        match e {
            MergeError::FragmentShapeMismatch { index, part } => {
                Error::FragmentShapeMismatch { index, part }
            }
            MergeError::UnsupportedVersion(version) => Error::UnsupportedVersion(version),
        }
    }
}

impl From<MalformedRow> for Error {
    fn from(e: MalformedRow) -> Self {
        Error::MalformedRow(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::InvalidArgument(e.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e.to_string())
    }
}
