//! Log row model
//!
//! A WITSML 1.x log carries its curve data as delimited text, one line per
//! acquisition step:
//!
//! ```text
//! 10.0, 1.1, 2.2
//! 10.5, 1.3, 2.0
//! ```
//!
//! The first field is the index channel (depth or time); the rest are
//! channel values in mnemonic-list order.
//!
//! ## Delimiter rules
//!
//! Fields are separated by a comma with optional whitespace on either side,
//! so `"10,1.1"`, `"10, 1.1"` and `"10 , 1.1"` all yield `["10", "1.1"]`.
//! Trailing empty fields are dropped; interior empty fields are kept as-is.
//! A line with no fields left is a [`RowError::Empty`].

use crate::error::{MalformedRow, RowError};
use std::fmt;

/// Field delimiter used by 1.x log data and mnemonic lists
pub const DELIMITER: char = ',';

/// One acquisition step: `[index, value_1, …, value_n]`
///
/// Always holds at least the index field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    fields: Vec<String>,
}

impl LogRow {
    /// Parse one delimited data line
    ///
    /// # Examples
    ///
    /// ```
    /// use valve_core::LogRow;
    ///
    /// let row = LogRow::parse("10 , 1.1,2.2").unwrap();
    /// assert_eq!(row.index(), "10");
    /// assert_eq!(row.values(), ["1.1", "2.2"]);
    /// ```
    pub fn parse(line: &str) -> Result<Self, RowError> {
        let mut fields: Vec<String> = line
            .trim()
            .split(DELIMITER)
            .map(|field| field.trim().to_string())
            .collect();
        while fields.last().is_some_and(|field| field.is_empty()) {
            fields.pop();
        }
        Self::from_fields(fields)
    }

    /// Build a row from already-split fields
    ///
    /// Fails if there are no fields or the index field is blank.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, RowError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        match fields.first() {
            None => Err(RowError::Empty),
            Some(index) if index.trim().is_empty() => Err(RowError::MissingIndex),
            Some(_) => Ok(LogRow { fields }),
        }
    }

    /// The index channel field
    pub fn index(&self) -> &str {
        &self.fields[0]
    }

    /// The value channel fields, in mnemonic order
    pub fn values(&self) -> &[String] {
        &self.fields[1..]
    }

    /// All fields, index first
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields including the index
    pub fn width(&self) -> usize {
        self.fields.len()
    }
}

/// Ordered rows of one log, in acquisition order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRowSet {
    rows: Vec<LogRow>,
}

impl LogRowSet {
    /// Create an empty row set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse delimited data lines, keeping their order
    ///
    /// The first malformed line aborts the parse and is reported by position.
    pub fn parse_lines<I, S>(lines: I) -> Result<Self, MalformedRow>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| LogRow::parse(line.as_ref()).map_err(|e| MalformedRow::new(i, e)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LogRowSet { rows })
    }

    /// Append a row at the end
    pub fn push(&mut self, row: LogRow) {
        self.rows.push(row);
    }

    /// Iterate rows in acquisition order
    pub fn iter(&self) -> std::slice::Iter<'_, LogRow> {
        self.rows.iter()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check every row carries one field per mnemonic
    pub fn check_width(&self, mnemonics: &MnemonicList) -> Result<(), MalformedRow> {
        for (i, row) in self.rows.iter().enumerate() {
            if row.width() != mnemonics.len() {
                return Err(MalformedRow::new(
                    i,
                    RowError::WidthMismatch {
                        expected: mnemonics.len(),
                        actual: row.width(),
                    },
                ));
            }
        }
        Ok(())
    }
}

impl From<Vec<LogRow>> for LogRowSet {
    fn from(rows: Vec<LogRow>) -> Self {
        LogRowSet { rows }
    }
}

impl FromIterator<LogRow> for LogRowSet {
    fn from_iter<T: IntoIterator<Item = LogRow>>(iter: T) -> Self {
        LogRowSet {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LogRowSet {
    type Item = &'a LogRow;
    type IntoIter = std::slice::Iter<'a, LogRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Ordered channel names; index 0 names the index channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MnemonicList(Vec<String>);

impl MnemonicList {
    /// Parse a comma-delimited mnemonic list such as `"DEPT, GR,ROP"`
    ///
    /// Applies the same delimiter rules as data rows; an empty string gives
    /// an empty list.
    pub fn parse(wire: &str) -> Self {
        let mut names: Vec<String> = wire
            .trim()
            .split(DELIMITER)
            .map(|name| name.trim().to_string())
            .collect();
        while names.last().is_some_and(|name| name.is_empty()) {
            names.pop();
        }
        MnemonicList(names)
    }

    /// The comma-joined wire form, no spaces
    pub fn to_wire(&self) -> String {
        self.0.join(",")
    }

    /// The index channel mnemonic, if any
    pub fn index_mnemonic(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Iterate mnemonics in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of mnemonics
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MnemonicList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        MnemonicList(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for MnemonicList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}
