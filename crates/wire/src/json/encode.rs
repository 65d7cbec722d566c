//! Row set encoding
//!
//! Each row becomes `[[index],[value, value, …]]` and the rows are wrapped in
//! one outer array:
//!
//! ```text
//! 10,1.1,2.2   ─┐
//! 20,3.3,4.4   ─┴─►  [[[10],[1.1, 2.2]],[[20],[3.3, 4.4]]]
//! ```
//!
//! An index-only row encodes as `[[index],[]]`.

use super::builder::NestedArrayBuilder;
use super::error::TranscodeError;
use valve_core::{LogRow, LogRowSet};

/// Encode a row set as a nested-array JSON string
///
/// # Examples
///
/// ```
/// use valve_core::LogRowSet;
/// use valve_wire::encode_rows;
///
/// let rows = LogRowSet::parse_lines(["10,1.1,2.2"]).unwrap();
/// assert_eq!(encode_rows(&rows).unwrap(), "[[[10],[1.1, 2.2]]]");
/// ```
pub fn encode_rows(rows: &LogRowSet) -> Result<String, TranscodeError> {
    let mut builder = NestedArrayBuilder::with_capacity(estimate_len(rows));
    builder.open()?;
    for row in rows {
        encode_row(&mut builder, row)?;
    }
    builder.close()?;
    builder.finish()
}

/// Parse raw delimited lines and encode them
///
/// A blank or delimiter-only line fails with the row's position.
pub fn encode_lines<I, S>(lines: I) -> Result<String, TranscodeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rows = LogRowSet::parse_lines(lines)?;
    encode_rows(&rows)
}

fn encode_row(builder: &mut NestedArrayBuilder, row: &LogRow) -> Result<(), TranscodeError> {
    builder.open()?;

    builder.open()?;
    builder.scalar(row.index())?;
    builder.close()?;

    builder.open()?;
    for value in row.values() {
        builder.scalar(value)?;
    }
    builder.close()?;

    builder.close()
}

fn estimate_len(rows: &LogRowSet) -> usize {
    // Field text plus ", " per field and a handful of brackets per row.
    2 + rows
        .iter()
        .map(|row| row.fields().iter().map(|f| f.len() + 2).sum::<usize>() + 8)
        .sum::<usize>()
}
