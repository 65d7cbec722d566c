//! # WITSML Valve
//!
//! Adapter layer between a WITSML server's object layer and its neighbours.
//!
//! The valve does two things:
//!
//! - shapes log curve data into the nested-array JSON payload the downstream
//!   data platform reads
//! - merges independently rendered single-object XML documents into one
//!   response when a query matches several objects
//!
//! ## Quick Start
//!
//! ```
//! use witsml_valve::prelude::*;
//!
//! let valve = Valve::new();
//!
//! // Log rows to payload
//! let rows = LogRowSet::parse_lines(["10,1.1,2.2"])?;
//! let payload = valve.payload(&MnemonicList::parse("DEPT,GR,ROP"), &rows)?;
//! assert_eq!(payload.data, "[[[10],[1.1, 2.2]]]");
//!
//! // No matches still answers with a well-formed container
//! let empty: [&str; 0] = [];
//! let doc = valve.merge_at(&empty, SchemaVersion::V1311, ObjectType::Well)?;
//! assert!(doc.ends_with("</wells>"));
//! # Ok::<(), witsml_valve::Error>(())
//! ```
//!
//! ## Crates
//!
//! - `valve-core`: rows, mnemonic lists, log objects, schema tags
//! - `valve-wire`: the JSON and XML encodings
//! - `valve-config`: [`ValveOptions`]

#![warn(missing_docs)]

mod error;
mod valve;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use valve::{ObjectRenderer, RenderError, Valve};

pub use valve_config::{ConfigError, ValveOptions};
pub use valve_core::{
    Log1311, Log1411, LogCurveInfo, LogData1311, LogData1411, LogObject, LogRow, LogRowSet,
    MalformedRow, MnemonicList, ObjectType, RowError, RowWidthCheck, SchemaVersion,
};
pub use valve_wire::{
    build_payload, build_payload_with, encode_rows, merge, merge_objects, merge_tags,
    FragmentPart, FragmentShape, MergeError, TranscodeError, TranscodedPayload, XML_DECLARATION,
};
