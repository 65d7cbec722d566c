//! Options for the WITSML valve.
//!
//! [`ValveOptions`] is built in code with the builder methods, or loaded from
//! a TOML file layered over the built-in defaults:
//!
//! ```toml
//! row_width      = "strict"   # or "off"
//! default_schema = "1.4.1.1"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use valve_core::{RowWidthCheck, SchemaVersion};

const DEFAULT_OPTIONS: &str = r#"
row_width      = "strict"
default_schema = "1.4.1.1"
"#;

/// Errors raised while loading options
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The options file is missing, unreadable or not valid TOML
    #[error("failed to load valve options: {0}")]
    Load(#[from] config::ConfigError),
}

/// Options controlling transcoding and merging.
///
/// ```
/// use valve_config::ValveOptions;
/// use valve_core::{RowWidthCheck, SchemaVersion};
///
/// let opts = ValveOptions::new()
///     .row_width(RowWidthCheck::Off)
///     .default_schema(SchemaVersion::V1311);
/// assert_eq!(opts.row_width, RowWidthCheck::Off);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValveOptions {
    /// Row width policy for log payloads
    #[serde(default)]
    pub row_width: RowWidthCheck,
    /// Schema version assumed when a caller names none
    #[serde(default = "default_schema")]
    pub default_schema: SchemaVersion,
}

fn default_schema() -> SchemaVersion {
    SchemaVersion::V1411
}

impl ValveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_width(mut self, check: RowWidthCheck) -> Self {
        self.row_width = check;
        self
    }

    pub fn default_schema(mut self, version: SchemaVersion) -> Self {
        self.default_schema = version;
        self
    }

    /// Load from a TOML file on top of the built-in defaults.
    ///
    /// The file must exist; keys it omits keep their default.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let options = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_OPTIONS, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(options)
    }

    /// Parse TOML text on top of the built-in defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let options = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_OPTIONS, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(options)
    }
}

impl Default for ValveOptions {
    fn default() -> Self {
        Self {
            row_width: RowWidthCheck::Strict,
            default_schema: default_schema(),
        }
    }
}
