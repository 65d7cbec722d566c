//! Log data objects as handed over by the WITSML object layer
//!
//! Only the parts the valve reads are modeled. The two 1.x schema versions
//! lay out log data differently:
//!
//! | Version | Mnemonics | Data lines |
//! |---------|-----------|------------|
//! | 1.3.1.1 | one `logCurveInfo` per curve | single optional `logData` |
//! | 1.4.1.1 | `mnemonicList` inside each `logData` | `logData` collection |

use crate::log::MnemonicList;
use crate::types::SchemaVersion;

/// Curve header of a 1.3.1.1 log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogCurveInfo {
    /// Curve mnemonic
    pub mnemonic: String,
    /// Unit of measure, if declared. Carried from the object layer; the
    /// payload has no unit slot, so it only shows up in diagnostics.
    pub unit: Option<String>,
}

impl LogCurveInfo {
    /// Curve with a mnemonic and no unit
    pub fn new(mnemonic: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            unit: None,
        }
    }
}

/// `logData` element of a 1.3.1.1 log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogData1311 {
    /// Raw delimited data lines
    pub data: Vec<String>,
}

/// WITSML 1.3.1.1 log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Log1311 {
    pub uid: String,
    /// Human-readable log name, carried for diagnostics
    pub name: String,
    /// Curve headers, index curve first
    pub log_curve_info: Vec<LogCurveInfo>,
    pub log_data: Option<LogData1311>,
}

impl Log1311 {
    /// Mnemonics of every curve header, in order
    pub fn mnemonics(&self) -> MnemonicList {
        self.log_curve_info
            .iter()
            .map(|curve| curve.mnemonic.clone())
            .collect()
    }

    /// Units of every curve header, in order; undeclared units are empty
    pub fn units(&self) -> MnemonicList {
        self.log_curve_info
            .iter()
            .map(|curve| curve.unit.clone().unwrap_or_default())
            .collect()
    }

    /// Raw data lines; empty if the log has no `logData`
    pub fn data_lines(&self) -> &[String] {
        self.log_data
            .as_ref()
            .map(|log_data| log_data.data.as_slice())
            .unwrap_or(&[])
    }
}

/// One `logData` element of a 1.4.1.1 log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogData1411 {
    /// Raw comma-delimited mnemonic list
    pub mnemonic_list: String,
    /// Raw comma-delimited unit list, carried for diagnostics
    pub unit_list: String,
    /// Raw delimited data lines
    pub data: Vec<String>,
}

/// WITSML 1.4.1.1 log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Log1411 {
    pub uid: String,
    /// Human-readable log name, carried for diagnostics
    pub name: String,
    pub log_data: Vec<LogData1411>,
}

impl Log1411 {
    /// The `logData` element the valve reads.
    ///
    /// Only the first element is ever populated on this path; any others
    /// are ignored.
    pub fn primary_log_data(&self) -> Option<&LogData1411> {
        self.log_data.first()
    }

    /// Mnemonics of the primary `logData`; empty if there is none
    pub fn mnemonics(&self) -> MnemonicList {
        self.primary_log_data()
            .map(|log_data| MnemonicList::parse(&log_data.mnemonic_list))
            .unwrap_or_default()
    }

    /// Units of the primary `logData`; empty if there is none
    pub fn units(&self) -> MnemonicList {
        self.primary_log_data()
            .map(|log_data| MnemonicList::parse(&log_data.unit_list))
            .unwrap_or_default()
    }

    /// Raw data lines of the primary `logData`; empty if there is none
    pub fn data_lines(&self) -> &[String] {
        self.primary_log_data()
            .map(|log_data| log_data.data.as_slice())
            .unwrap_or(&[])
    }
}

/// A log at one of the schema versions the transcoder reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogObject {
    V1311(Log1311),
    V1411(Log1411),
}

impl LogObject {
    /// Schema version tag used to pick the conversion
    pub fn schema_version(&self) -> SchemaVersion {
        match self {
            LogObject::V1311(_) => SchemaVersion::V1311,
            LogObject::V1411(_) => SchemaVersion::V1411,
        }
    }

    pub fn uid(&self) -> &str {
        match self {
            LogObject::V1311(log) => &log.uid,
            LogObject::V1411(log) => &log.uid,
        }
    }
}

impl From<Log1311> for LogObject {
    fn from(log: Log1311) -> Self {
        LogObject::V1311(log)
    }
}

impl From<Log1411> for LogObject {
    fn from(log: Log1411) -> Self {
        LogObject::V1411(log)
    }
}
