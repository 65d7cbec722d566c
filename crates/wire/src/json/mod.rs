//! Log data transcoding to the nested-array JSON wire form
//!
//! This module turns delimited log rows into the structure the downstream
//! data platform reads, separating the index channel from the values:
//!
//! - [`NestedArrayBuilder`]: token-level array writer, owns bracket rules
//! - [`encode_rows`]: row set to `[[[index],[values…]], …]`
//! - [`build_payload`] and the per-version adapters: the
//!   `{"mnemonicList", "data"}` envelope

mod builder;
mod encode;
mod error;
mod payload;

pub use builder::{NestedArrayBuilder, Token};
pub use encode::{encode_lines, encode_rows};
pub use error::TranscodeError;
pub use payload::{
    build_payload, build_payload_with, encode_log, log_data_json, payload_from_1311,
    payload_from_1411, TranscodedPayload,
};
