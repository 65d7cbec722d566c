//! The `Valve` facade.
//!
//! The server's read path calls into the valve at two points: when a log is
//! shipped to the data platform as a payload, and when a query matched more
//! than one object and the rendered documents need one shared root.

use crate::error::Result;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use valve_config::ValveOptions;
use valve_core::{LogObject, LogRowSet, MnemonicList, ObjectType, SchemaVersion};
use valve_wire::{build_payload_with, encode_log, log_data_json, merge_objects, TranscodedPayload};

/// Failure reported by an [`ObjectRenderer`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

impl RenderError {
    /// Error carrying `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Serializes one domain object to a complete single-object XML document.
///
/// The valve never renders objects itself; the object layer does, and the
/// valve merges what comes back. Closures of the right shape implement this
/// trait.
pub trait ObjectRenderer<T: ?Sized> {
    /// Render `object` at `version`, wrapped in its plural root element
    fn render(&self, object: &T, version: SchemaVersion) -> std::result::Result<String, RenderError>;
}

impl<T: ?Sized, F> ObjectRenderer<T> for F
where
    F: Fn(&T, SchemaVersion) -> std::result::Result<String, RenderError>,
{
    fn render(&self, object: &T, version: SchemaVersion) -> std::result::Result<String, RenderError> {
        self(object, version)
    }
}

/// Entry point for transcoding and merging.
///
/// # Example
///
/// ```
/// use witsml_valve::prelude::*;
///
/// let valve = Valve::new();
/// let rows = LogRowSet::parse_lines(["10,1.1", "20,3.3"])?;
/// let payload = valve.payload(&MnemonicList::parse("DEPT,GR"), &rows)?;
/// assert_eq!(payload.data, "[[[10],[1.1]],[[20],[3.3]]]");
/// # Ok::<(), witsml_valve::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Valve {
    options: ValveOptions,
}

impl Valve {
    /// Valve with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Valve with explicit options
    pub fn with_options(options: ValveOptions) -> Self {
        Self { options }
    }

    /// Valve with options read from a TOML file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let options = ValveOptions::load(path.as_ref())?;
        debug!(path = %path.as_ref().display(), ?options, "loaded valve options");
        Ok(Self::with_options(options))
    }

    /// Options in effect
    pub fn options(&self) -> &ValveOptions {
        &self.options
    }

    /// Payload for explicit mnemonics and rows, under the configured width check
    pub fn payload(&self, mnemonics: &MnemonicList, rows: &LogRowSet) -> Result<TranscodedPayload> {
        Ok(build_payload_with(mnemonics, rows, self.options.row_width)?)
    }

    /// Payload for a log object; `None` for an absent log
    pub fn log_payload(&self, log: Option<&LogObject>) -> Result<Option<TranscodedPayload>> {
        if let Some(log) = log {
            debug!(uid = log.uid(), version = %log.schema_version(), "shaping log payload");
        }
        Ok(encode_log(log, self.options.row_width)?)
    }

    /// Nested-array data string for a log object; `None` for an absent log
    pub fn log_data(&self, log: Option<&LogObject>) -> Result<Option<String>> {
        Ok(log_data_json(log)?)
    }

    /// Merge fragments rendered at the configured default schema
    pub fn merge<S: AsRef<str>>(&self, fragments: &[S], object: ObjectType) -> Result<String> {
        self.merge_at(fragments, self.options.default_schema, object)
    }

    /// Merge fragments rendered at `version`
    pub fn merge_at<S: AsRef<str>>(
        &self,
        fragments: &[S],
        version: SchemaVersion,
        object: ObjectType,
    ) -> Result<String> {
        Ok(merge_objects(fragments, version, object)?)
    }

    /// Render every object and merge the results into one response.
    ///
    /// Objects are rendered in order; the first render failure aborts the
    /// response.
    pub fn read_response<T, R>(
        &self,
        objects: &[T],
        version: SchemaVersion,
        object: ObjectType,
        renderer: &R,
    ) -> Result<String>
    where
        R: ObjectRenderer<T> + ?Sized,
    {
        let fragments = objects
            .iter()
            .enumerate()
            .map(|(i, obj)| {
                renderer.render(obj, version).map_err(|e| {
                    warn!(index = i, object = object.name(), error = %e, "render failed");
                    e
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(
            objects = fragments.len(),
            object = object.name(),
            version = %version,
            "assembling read response"
        );
        self.merge_at(&fragments, version, object)
    }
}
