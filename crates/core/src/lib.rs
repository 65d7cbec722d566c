//! Core types for the WITSML valve
//!
//! This crate holds the data model the wire encoders work on:
//! - [`SchemaVersion`] and [`ObjectType`] tags
//! - [`LogRow`], [`LogRowSet`] and [`MnemonicList`] for delimited log data
//! - [`LogObject`] and its per-version shapes as supplied by the object layer
//!
//! Nothing here performs I/O; every type is plain owned data and is
//! `Send + Sync`.

pub mod error;
pub mod log;
pub mod objects;
pub mod types;

pub use error::{MalformedRow, ParseError, RowError};
pub use log::{LogRow, LogRowSet, MnemonicList, DELIMITER};
pub use objects::{Log1311, Log1411, LogCurveInfo, LogData1311, LogData1411, LogObject};
pub use types::{ObjectType, RowWidthCheck, SchemaVersion};
