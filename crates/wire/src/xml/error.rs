//! Merge errors

use std::fmt;
use thiserror::Error;
use valve_core::SchemaVersion;

/// The part of a fragment that failed the exact-match check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentPart {
    /// XML declaration followed by the root open tag
    Prefix,
    /// Root close tag
    Close,
}

impl fmt::Display for FragmentPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentPart::Prefix => f.write_str("XML declaration and root open tag"),
            FragmentPart::Close => f.write_str("root close tag"),
        }
    }
}

/// Errors raised while merging rendered fragments
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MergeError {
    /// A fragment does not carry the exact declaration or root tags expected
    /// for its schema version
    #[error("fragment {index} does not match the expected {part}")]
    FragmentShapeMismatch {
        /// Zero-based position of the fragment
        index: usize,
        /// Which part failed to match
        part: FragmentPart,
    },

    /// The schema version has no plural root element to merge under
    #[error("schema version {0} objects have no plural root to merge under")]
    UnsupportedVersion(SchemaVersion),
}
