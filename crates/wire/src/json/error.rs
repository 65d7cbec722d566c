//! Transcoding errors

use thiserror::Error;
use valve_core::MalformedRow;

/// Errors raised while transcoding log data to the nested-array wire form
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranscodeError {
    /// A data row was empty or did not match the mnemonic list
    #[error(transparent)]
    MalformedRow(#[from] MalformedRow),

    /// Builder tokens did not form one balanced array
    #[error("unbalanced array structure: {0}")]
    Unbalanced(&'static str),

    /// Envelope could not be rendered as JSON
    #[error("payload serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TranscodeError {
    fn from(e: serde_json::Error) -> Self {
        TranscodeError::Serialization(e.to_string())
    }
}
