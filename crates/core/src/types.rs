//! Core types shared across the valve
//!
//! This module defines the tags the rest of the system dispatches on:
//! - [`SchemaVersion`]: WITSML data schema version of an object or query
//! - [`ObjectType`]: WITSML data object kind, naming the plural root element
//! - [`RowWidthCheck`]: whether row widths are checked against the mnemonic list

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// WITSML data schema version
///
/// The 1.x schemas wrap every object in a plural, version-tagged container
/// element. 2.0 objects stand alone and carry no such wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SchemaVersion {
    /// WITSML 1.3.1.1
    V1311,
    /// WITSML 1.4.1.1
    V1411,
    /// WITSML 2.0 (Energistics common v2.1 data objects)
    V20,
}

impl SchemaVersion {
    /// All versions known to the valve, oldest first
    pub const ALL: [SchemaVersion; 3] = [SchemaVersion::V1311, SchemaVersion::V1411, SchemaVersion::V20];

    /// The version tag as it appears in the `version` attribute and in queries
    pub fn tag(&self) -> &'static str {
        match self {
            SchemaVersion::V1311 => "1.3.1.1",
            SchemaVersion::V1411 => "1.4.1.1",
            SchemaVersion::V20 => "2.0",
        }
    }

    /// Whether objects of this version are rendered inside a plural root element
    pub fn has_plural_root(&self) -> bool {
        !matches!(self, SchemaVersion::V20)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SchemaVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1.3.1.1" => Ok(SchemaVersion::V1311),
            "1.4.1.1" => Ok(SchemaVersion::V1411),
            "2.0" => Ok(SchemaVersion::V20),
            other => Err(ParseError::UnknownSchemaVersion(other.to_string())),
        }
    }
}

impl TryFrom<String> for SchemaVersion {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SchemaVersion> for String {
    fn from(version: SchemaVersion) -> Self {
        version.tag().to_string()
    }
}

/// WITSML data object kind
///
/// Only the name matters to the valve: 1.x renderers wrap each object in a
/// container element named after the plural of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Well,
    Wellbore,
    Log,
    Trajectory,
    MudLog,
    Rig,
    Message,
    Tubular,
    Risk,
    BhaRun,
    WbGeometry,
    FluidsReport,
    Attachment,
}

impl ObjectType {
    /// The singular WITSML type name, e.g. `mudLog`
    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::Well => "well",
            ObjectType::Wellbore => "wellbore",
            ObjectType::Log => "log",
            ObjectType::Trajectory => "trajectory",
            ObjectType::MudLog => "mudLog",
            ObjectType::Rig => "rig",
            ObjectType::Message => "message",
            ObjectType::Tubular => "tubular",
            ObjectType::Risk => "risk",
            ObjectType::BhaRun => "bhaRun",
            ObjectType::WbGeometry => "wbGeometry",
            ObjectType::FluidsReport => "fluidsReport",
            ObjectType::Attachment => "attachment",
        }
    }

    /// The plural container element name.
    ///
    /// WITSML pluralizes by appending `s`, including `trajectorys` and
    /// `wbGeometrys`.
    pub fn plural(&self) -> String {
        format!("{}s", self.name())
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim() {
            "well" => ObjectType::Well,
            "wellbore" => ObjectType::Wellbore,
            "log" => ObjectType::Log,
            "trajectory" => ObjectType::Trajectory,
            "mudLog" | "mudlog" => ObjectType::MudLog,
            "rig" => ObjectType::Rig,
            "message" => ObjectType::Message,
            "tubular" => ObjectType::Tubular,
            "risk" => ObjectType::Risk,
            "bhaRun" | "bharun" => ObjectType::BhaRun,
            "wbGeometry" | "wbgeometry" => ObjectType::WbGeometry,
            "fluidsReport" | "fluidsreport" => ObjectType::FluidsReport,
            "attachment" => ObjectType::Attachment,
            other => return Err(ParseError::UnknownObjectType(other.to_string())),
        };
        Ok(kind)
    }
}

/// Row width policy applied when a payload is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowWidthCheck {
    /// Every row must carry exactly one field per mnemonic
    #[default]
    Strict,
    /// Rows are passed through whatever their width
    Off,
}
