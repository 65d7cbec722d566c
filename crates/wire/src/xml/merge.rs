//! Multi-object response merging
//!
//! The renderer serializes one object at a time inside its own root element.
//! When a query matches several objects, their fragments are spliced into a
//! single document: one declaration, one root open tag, every inner object
//! element in input order, one root close tag.

use super::error::MergeError;
use super::shape::FragmentShape;
use tracing::{debug, warn};
use valve_core::{ObjectType, SchemaVersion};

/// Merge rendered fragments that share `shape`
///
/// - no fragments: the empty root document
/// - one fragment: returned unchanged
/// - otherwise every fragment must match `shape` exactly
///
/// Fragments are never reordered or deduplicated.
pub fn merge<S: AsRef<str>>(fragments: &[S], shape: &FragmentShape) -> Result<String, MergeError> {
    match fragments {
        [] => Ok(shape.empty_document()),
        [single] => Ok(single.as_ref().to_string()),
        _ => {
            let inners = fragments
                .iter()
                .enumerate()
                .map(|(i, fragment)| shape.inner(fragment.as_ref(), i))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    warn!(error = %e, fragments = fragments.len(), "refusing to merge fragments");
                    e
                })?;

            let capacity = shape.declaration().len()
                + shape.root_open().len()
                + inners.iter().map(|inner| inner.len()).sum::<usize>()
                + shape.root_close().len();
            let mut doc = String::with_capacity(capacity);
            doc.push_str(shape.declaration());
            doc.push_str(shape.root_open());
            for inner in &inners {
                doc.push_str(inner);
            }
            doc.push_str(shape.root_close());

            debug!(fragments = fragments.len(), bytes = doc.len(), "merged fragments");
            Ok(doc)
        }
    }
}

/// Merge fragments given their literal root open and close tags
pub fn merge_tags<S: AsRef<str>>(
    fragments: &[S],
    root_open: &str,
    root_close: &str,
) -> Result<String, MergeError> {
    merge(fragments, &FragmentShape::new(root_open, root_close))
}

/// Merge fragments of `object` rendered at `version`
///
/// A single fragment passes through at any version. 2.0 has no plural root,
/// so zero or several 2.0 fragments fail with `UnsupportedVersion`.
pub fn merge_objects<S: AsRef<str>>(
    fragments: &[S],
    version: SchemaVersion,
    object: ObjectType,
) -> Result<String, MergeError> {
    if let [single] = fragments {
        return Ok(single.as_ref().to_string());
    }
    merge(fragments, &FragmentShape::for_object(version, object)?)
}
