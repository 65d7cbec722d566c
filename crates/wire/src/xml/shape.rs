//! Fragment shapes per schema version
//!
//! A 1.x renderer emits one object per document, in four parts:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8" standalone="yes"?>             declaration
//! <wellbores version="1.3.1.1" xmlns="http://www.witsml.org/schemas/131">  root open
//! <wellbore uid="A">…</wellbore>                                       inner
//! </wellbores>                                                         root close
//! ```
//!
//! (shown on separate lines; the renderer writes them back to back)
//!
//! Matching is exact. Any whitespace or attribute drift from the renderer
//! is a shape mismatch.

use super::error::{FragmentPart, MergeError};
use valve_core::{ObjectType, SchemaVersion};

/// XML declaration emitted by the renderer
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Default namespace of the plural root element, by schema version
pub fn namespace(version: SchemaVersion) -> Option<&'static str> {
    match version {
        SchemaVersion::V1311 => Some("http://www.witsml.org/schemas/131"),
        SchemaVersion::V1411 => Some("http://www.witsml.org/schemas/1series"),
        SchemaVersion::V20 => None,
    }
}

/// Declaration and root tags every fragment of one query must carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentShape {
    declaration: String,
    root_open: String,
    root_close: String,
}

impl FragmentShape {
    /// Shape with the standard declaration and the given root tags
    pub fn new(root_open: impl Into<String>, root_close: impl Into<String>) -> Self {
        Self {
            declaration: XML_DECLARATION.to_string(),
            root_open: root_open.into(),
            root_close: root_close.into(),
        }
    }

    /// Replace the expected declaration
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = declaration.into();
        self
    }

    /// Shape the renderer emits for `object` at `version`
    ///
    /// # Examples
    ///
    /// ```
    /// use valve_core::{ObjectType, SchemaVersion};
    /// use valve_wire::FragmentShape;
    ///
    /// let shape = FragmentShape::for_object(SchemaVersion::V1311, ObjectType::Wellbore).unwrap();
    /// assert_eq!(
    ///     shape.root_open(),
    ///     r#"<wellbores version="1.3.1.1" xmlns="http://www.witsml.org/schemas/131">"#
    /// );
    /// assert_eq!(shape.root_close(), "</wellbores>");
    /// ```
    pub fn for_object(version: SchemaVersion, object: ObjectType) -> Result<Self, MergeError> {
        let ns = namespace(version).ok_or(MergeError::UnsupportedVersion(version))?;
        let plural = object.plural();
        Ok(Self::new(
            format!(r#"<{} version="{}" xmlns="{}">"#, plural, version.tag(), ns),
            format!("</{}>", plural),
        ))
    }

    /// Expected XML declaration
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Expected root open tag
    pub fn root_open(&self) -> &str {
        &self.root_open
    }

    /// Expected root close tag
    pub fn root_close(&self) -> &str {
        &self.root_close
    }

    /// Document with the root element and no objects
    pub fn empty_document(&self) -> String {
        let mut doc = String::with_capacity(
            self.declaration.len() + self.root_open.len() + self.root_close.len(),
        );
        doc.push_str(&self.declaration);
        doc.push_str(&self.root_open);
        doc.push_str(&self.root_close);
        doc
    }

    /// Strip declaration, root open and root close from `fragment`
    pub(crate) fn inner<'a>(&self, fragment: &'a str, index: usize) -> Result<&'a str, MergeError> {
        let rest = fragment
            .strip_prefix(self.declaration.as_str())
            .and_then(|rest| rest.strip_prefix(self.root_open.as_str()))
            .ok_or(MergeError::FragmentShapeMismatch {
                index,
                part: FragmentPart::Prefix,
            })?;
        rest.strip_suffix(self.root_close.as_str())
            .ok_or(MergeError::FragmentShapeMismatch {
                index,
                part: FragmentPart::Close,
            })
    }
}
