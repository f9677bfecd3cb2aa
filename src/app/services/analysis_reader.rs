//! XTM analysis file extraction
//!
//! Opens one analysis workbook, validates it against the template signature
//! and reads the fixed word-count cells into the six aggregate buckets.
//!
//! Cell values arrive either as numbers or as formatted text ("1 234",
//! "1,234"), so coercion takes both paths: numeric values are rounded to
//! the nearest integer, text is stripped of spaces and thousands
//! separators and parsed, defaulting to zero when that fails.

use crate::app::models::{AnalysisCounts, WordBuckets};
use crate::constants::{BUCKET_CELLS, BUCKET_COUNT, TEMPLATE_MARKER, VALIDATION_CELL};
use crate::{Error, Result};
use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use std::path::Path;
use tracing::debug;

/// Read one analysis file into its aggregate word-count buckets.
///
/// Failure to open or parse the workbook and a missing template marker are
/// the two skip conditions; the caller decides how to report them. The
/// workbook handle is dropped before this function returns.
pub fn read_analysis(path: &Path) -> Result<AnalysisCounts> {
    let file = path.display().to_string();

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| Error::workbook(file.clone(), "failed to open workbook", Some(e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::workbook(file.clone(), "workbook has no worksheets", None))?
        .map_err(|e| Error::workbook(file.clone(), "failed to read first worksheet", Some(e)))?;

    let target_header = cell_text(&range, VALIDATION_CELL)?;
    if !target_header
        .to_lowercase()
        .contains(&TEMPLATE_MARKER.to_lowercase())
    {
        return Err(Error::invalid_template(file));
    }

    let counts = bucket_totals(&range)?;
    debug!(
        "Extracted {} words from {}",
        counts.total_words(),
        path.display()
    );

    Ok(AnalysisCounts {
        target_header,
        counts,
    })
}

/// Sum the template cells into their buckets, in table order
fn bucket_totals(range: &Range<Data>) -> Result<WordBuckets> {
    let mut totals = [0i64; BUCKET_COUNT];
    for (bucket, (_, cells)) in totals.iter_mut().zip(BUCKET_CELLS.iter()) {
        for address in *cells {
            let position = parse_cell_ref(address)?;
            let value = range.get_value(position).map(coerce_word_count).unwrap_or(0);
            *bucket += value;
        }
    }
    Ok(WordBuckets::from_totals(totals))
}

/// Read a cell's text, treating absent cells as empty
fn cell_text(range: &Range<Data>, address: &str) -> Result<String> {
    let position = parse_cell_ref(address)?;
    Ok(range
        .get_value(position)
        .and_then(|value| value.as_string())
        .unwrap_or_default())
}

/// Coerce a cell value to an integer word count.
///
/// Numeric cells round to the nearest integer; text cells go through
/// [`parse_count_text`]; everything else counts as zero.
pub fn coerce_word_count(value: &Data) -> i64 {
    match value {
        Data::Int(i) => *i,
        Data::Float(f) => f.round() as i64,
        Data::String(s) => parse_count_text(s),
        Data::Empty | Data::Bool(_) | Data::Error(_) => 0,
        other => other.as_f64().map(|f| f.round() as i64).unwrap_or(0),
    }
}

/// Parse numeric-looking text like "1 234", "1,234" or "1\u{00a0}234".
///
/// Unparseable non-empty text falls back to zero. That fallback is the
/// documented policy for this template; the debug note makes it traceable
/// without changing the default console output.
fn parse_count_text(text: &str) -> i64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return 0;
    }

    match cleaned.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            debug!("Unparseable word count text '{}', using 0", text);
            0
        }
    }
}

/// Parse an A1-style cell reference into zero-based (row, column)
pub fn parse_cell_ref(address: &str) -> Result<(u32, u32)> {
    let letters: String = address
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    let digits = &address[letters.len()..];

    if letters.is_empty() || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::cell_reference(address));
    }

    let mut column: u32 = 0;
    for c in letters.chars() {
        column = column * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    let row: u32 = digits
        .parse()
        .map_err(|_| Error::cell_reference(address))?;
    if row == 0 || column == 0 {
        return Err(Error::cell_reference(address));
    }

    Ok((row - 1, column - 1))
}
