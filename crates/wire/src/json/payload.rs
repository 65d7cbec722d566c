//! Log payload envelope
//!
//! The downstream data platform takes log data as a two-field object:
//!
//! ```json
//! {"mnemonicList":"DEPT,GR","data":"[[[10],[1.1]]]"}
//! ```
//!
//! `data` is the nested-array encoding *as a string*, not embedded JSON.
//!
//! ## Adapters
//!
//! The conversion is chosen by the log's schema version:
//!
//! | Version | Mnemonics from | Rows from |
//! |---------|----------------|-----------|
//! | 1.3.1.1 | `logCurveInfo` mnemonics | the single `logData` |
//! | 1.4.1.1 | first `logData` `mnemonicList` | first `logData` |
//!
//! Every adapter maps an absent log to `Ok(None)`.

use super::encode::encode_rows;
use super::error::TranscodeError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use valve_core::{Log1311, Log1411, LogObject, LogRowSet, MnemonicList, RowWidthCheck};

/// Mnemonic list plus nested-array data, both as strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscodedPayload {
    /// Comma-joined mnemonics, index channel first
    pub mnemonic_list: String,
    /// Nested-array encoding of the rows
    pub data: String,
}

impl TranscodedPayload {
    /// Render as `{"mnemonicList":…,"data":…}`
    pub fn to_json(&self) -> Result<String, TranscodeError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build a payload, requiring one field per mnemonic in every row
pub fn build_payload(
    mnemonics: &MnemonicList,
    rows: &LogRowSet,
) -> Result<TranscodedPayload, TranscodeError> {
    build_payload_with(mnemonics, rows, RowWidthCheck::Strict)
}

/// Build a payload under an explicit row width policy
pub fn build_payload_with(
    mnemonics: &MnemonicList,
    rows: &LogRowSet,
    check: RowWidthCheck,
) -> Result<TranscodedPayload, TranscodeError> {
    if check == RowWidthCheck::Strict {
        if let Err(e) = rows.check_width(mnemonics) {
            warn!(row = e.row, error = %e.source, "rejecting log rows");
            return Err(e.into());
        }
    }

    let payload = TranscodedPayload {
        mnemonic_list: mnemonics.to_wire(),
        data: encode_rows(rows)?,
    };
    debug!(
        rows = rows.len(),
        mnemonics = mnemonics.len(),
        bytes = payload.data.len(),
        "built log payload"
    );
    Ok(payload)
}

/// Payload for a 1.3.1.1 log
pub fn payload_from_1311(
    log: Option<&Log1311>,
    check: RowWidthCheck,
) -> Result<Option<TranscodedPayload>, TranscodeError> {
    let Some(log) = log else { return Ok(None) };
    let (mnemonics, rows) = extract_1311(log)?;
    build_payload_with(&mnemonics, &rows, check).map(Some)
}

/// Payload for a 1.4.1.1 log, read from its first `logData` only
pub fn payload_from_1411(
    log: Option<&Log1411>,
    check: RowWidthCheck,
) -> Result<Option<TranscodedPayload>, TranscodeError> {
    let Some(log) = log else { return Ok(None) };
    let (mnemonics, rows) = extract_1411(log)?;
    build_payload_with(&mnemonics, &rows, check).map(Some)
}

/// Payload for a log at any supported schema version
pub fn encode_log(
    log: Option<&LogObject>,
    check: RowWidthCheck,
) -> Result<Option<TranscodedPayload>, TranscodeError> {
    let Some(log) = log else { return Ok(None) };
    let (mnemonics, rows) = extract(log)?;
    build_payload_with(&mnemonics, &rows, check).map(Some)
}

/// Nested-array data string alone, as WITSML 2.0 carries it
pub fn log_data_json(log: Option<&LogObject>) -> Result<Option<String>, TranscodeError> {
    let Some(log) = log else { return Ok(None) };
    let (_, rows) = extract(log)?;
    encode_rows(&rows).map(Some)
}

fn extract(log: &LogObject) -> Result<(MnemonicList, LogRowSet), TranscodeError> {
    match log {
        LogObject::V1311(log) => extract_1311(log),
        LogObject::V1411(log) => extract_1411(log),
    }
}

fn extract_1311(log: &Log1311) -> Result<(MnemonicList, LogRowSet), TranscodeError> {
    debug!(uid = %log.uid, name = %log.name, units = %log.units(), "reading 1.3.1.1 log");
    Ok((log.mnemonics(), LogRowSet::parse_lines(log.data_lines())?))
}

fn extract_1411(log: &Log1411) -> Result<(MnemonicList, LogRowSet), TranscodeError> {
    if log.log_data.len() > 1 {
        debug!(
            uid = %log.uid,
            ignored = log.log_data.len() - 1,
            "reading first logData only"
        );
    }
    debug!(uid = %log.uid, name = %log.name, units = %log.units(), "reading 1.4.1.1 log");
    Ok((log.mnemonics(), LogRowSet::parse_lines(log.data_lines())?))
}
