//! Convenient imports for the valve.
//!
//! ```
//! use witsml_valve::prelude::*;
//!
//! let valve = Valve::new();
//! assert_eq!(valve.options().row_width, RowWidthCheck::Strict);
//! ```

// Main entry point
pub use crate::valve::{ObjectRenderer, RenderError, Valve};

// Error handling
pub use crate::error::{Error, Result};

// Options
pub use valve_config::ValveOptions;

// Log data
pub use valve_core::{LogObject, LogRow, LogRowSet, MnemonicList, RowWidthCheck};

// Schema tags
pub use valve_core::{ObjectType, SchemaVersion};

// Wire forms
pub use valve_wire::TranscodedPayload;
