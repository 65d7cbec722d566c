//! Merging of independently rendered WITSML 1.x XML fragments
//!
//! Fragment shapes come from a fixed table keyed by schema version and
//! object type; see [`FragmentShape::for_object`].

mod error;
mod merge;
mod shape;

pub use error::{FragmentPart, MergeError};
pub use merge::{merge, merge_objects, merge_tags};
pub use shape::{namespace, FragmentShape, XML_DECLARATION};
