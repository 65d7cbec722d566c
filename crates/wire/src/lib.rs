//! Wire encoding for the WITSML valve
//!
//! This crate implements the two byte-exact encodings the valve owes its
//! neighbours:
//!
//! - [`json`]: log rows to the nested-array JSON the data platform reads,
//!   plus the `{"mnemonicList", "data"}` envelope
//! - [`xml`]: N single-object WITSML 1.x documents merged under one root
//!
//! ## Log Data Encoding Rules
//!
//! | Input row | Encoding |
//! |-----------|----------|
//! | `10,1.1,2.2` | `[[10],[1.1, 2.2]]` |
//! | `10` | `[[10],[]]` |
//! | blank | error |
//! | `,1.1` (no index) | error |
//!
//! Rows are joined with `,` inside one outer array; no rows gives `[]`.
//!
//! ## Examples
//!
//! ```
//! use valve_core::{LogRowSet, MnemonicList};
//! use valve_wire::build_payload;
//!
//! let rows = LogRowSet::parse_lines(["10,1.1", "20,3.3"]).unwrap();
//! let payload = build_payload(&MnemonicList::parse("DEPT,GR"), &rows).unwrap();
//! assert_eq!(payload.mnemonic_list, "DEPT,GR");
//! assert_eq!(payload.data, "[[[10],[1.1]],[[20],[3.3]]]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;
pub mod xml;

// Re-export main types
pub use json::{
    build_payload, build_payload_with, encode_lines, encode_log, encode_rows, log_data_json,
    payload_from_1311, payload_from_1411, NestedArrayBuilder, Token, TranscodeError,
    TranscodedPayload,
};
pub use xml::{
    merge, merge_objects, merge_tags, FragmentPart, FragmentShape, MergeError, XML_DECLARATION,
};
