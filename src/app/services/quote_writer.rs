//! Summary workbook writer
//!
//! Accumulates one quote row per processed analysis file and writes the
//! formatted "Quote" sheet: a bold header, one data row per file sorted
//! by language display name, and auto-fitted column widths.

use crate::app::models::QuoteRow;
use crate::constants::{REPORT_HEADERS, REPORT_SHEET_NAME};
use crate::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::debug;

/// In-memory summary report, written once at the end of the run
#[derive(Debug, Default)]
pub struct QuoteReport {
    rows: Vec<QuoteRow>,
}

impl QuoteReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row in arrival order
    pub fn push(&mut self, row: QuoteRow) {
        self.rows.push(row);
    }

    /// Number of accumulated rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in their current order
    pub fn rows(&self) -> &[QuoteRow] {
        &self.rows
    }

    /// Sort rows by language display name, ascending.
    ///
    /// Plain lexicographic ordering; the sort is stable so equal names keep
    /// arrival order.
    pub fn sort_by_language(&mut self) {
        self.rows.sort_by(|a, b| a.language.cmp(&b.language));
    }

    /// Sort the rows and write the summary workbook to `path`.
    ///
    /// Existing files at `path` are overwritten.
    pub fn write(mut self, path: &Path) -> Result<()> {
        self.sort_by_language();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(REPORT_SHEET_NAME)?;

        let bold = Format::new().set_bold();
        for (col, header) in REPORT_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }

        for (index, row) in self.rows.iter().enumerate() {
            let excel_row = (index + 1) as u32;
            sheet.write_string(excel_row, 0, &row.language)?;
            for (col, value) in row.counts.as_columns().iter().enumerate() {
                sheet.write_number(excel_row, (col + 1) as u16, *value as f64)?;
            }
            sheet.write_number(
                excel_row,
                (REPORT_HEADERS.len() - 1) as u16,
                row.counts.total_words() as f64,
            )?;
        }

        sheet.autofit();
        workbook.save(path)?;

        debug!("Wrote {} quote rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::WordBuckets;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use tempfile::TempDir;

    fn row(language: &str, match_100: i64) -> QuoteRow {
        QuoteRow {
            language: language.to_string(),
            counts: WordBuckets {
                match_100,
                ..WordBuckets::default()
            },
        }
    }

    #[test]
    fn test_rows_sorted_by_language_name() {
        let mut report = QuoteReport::new();
        report.push(row("Polish", 1));
        report.push(row("English", 2));
        report.push(row("German", 3));

        report.sort_by_language();
        let names: Vec<&str> = report.rows().iter().map(|r| r.language.as_str()).collect();
        assert_eq!(names, vec!["English", "German", "Polish"]);
    }

    #[test]
    fn test_duplicate_languages_keep_their_own_rows() {
        let mut report = QuoteReport::new();
        report.push(row("German", 1));
        report.push(row("German", 2));

        report.sort_by_language();
        assert_eq!(report.len(), 2);
        assert_eq!(report.rows()[0].counts.match_100, 1);
        assert_eq!(report.rows()[1].counts.match_100, 2);
    }

    #[test]
    fn test_written_workbook_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Quote_20250101_0930.xlsx");

        let mut report = QuoteReport::new();
        report.push(QuoteRow {
            language: "Polish".to_string(),
            counts: WordBuckets {
                context_matches: 10,
                repetitions: 5,
                match_100: 20,
                match_95_99: 3,
                match_75_94: 2,
                new_words: 1,
            },
        });
        report.push(row("English", 7));
        report.write(&path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook
            .worksheet_range(REPORT_SHEET_NAME)
            .expect("Quote sheet present");

        // Header row
        assert_eq!(
            range.get_value((0, 0)),
            Some(&Data::String("Target language".to_string()))
        );
        assert_eq!(
            range.get_value((0, 7)),
            Some(&Data::String("Total words".to_string()))
        );

        // Sorted: English before Polish
        assert_eq!(
            range.get_value((1, 0)),
            Some(&Data::String("English".to_string()))
        );
        assert_eq!(
            range.get_value((2, 0)),
            Some(&Data::String("Polish".to_string()))
        );

        // Polish totals column carries the bucket sum
        assert_eq!(range.get_value((2, 7)), Some(&Data::Float(41.0)));
    }

    #[test]
    fn test_empty_report_writes_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.xlsx");
        QuoteReport::new().write(&path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range(REPORT_SHEET_NAME).unwrap();
        assert_eq!(range.height(), 1);
    }
}
