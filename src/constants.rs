//! Application constants for the XTM quote aggregator
//!
//! The XTM analysis template contract lives here as data: the validation
//! cell, the marker substring, and the mapping from aggregate buckets to
//! the fixed cell addresses summed into them.

// =============================================================================
// XTM Analysis Template Contract
// =============================================================================

/// Cell holding the template/target-language metadata text
pub const VALIDATION_CELL: &str = "B4";

/// Substring that must appear (any case) in the validation cell
pub const TEMPLATE_MARKER: &str = "Target";

/// Aggregate buckets and the template cells summed into each one.
///
/// Order matches the output column order. The addresses are fixed by the
/// XTM analysis template; reordering entries changes output semantics.
pub const BUCKET_CELLS: &[(&str, &[&str])] = &[
    ("Context Matches", &["D9", "D11"]),
    ("Repetitions", &["D18"]),
    ("100% match", &["D12"]),
    ("95-99%", &["D13", "D19"]),
    ("75-94%", &["D14", "D15", "D20", "D21"]),
    ("New Words", &["D16", "D22"]),
];

/// Number of aggregate buckets in the template contract
pub const BUCKET_COUNT: usize = BUCKET_CELLS.len();

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Extension of analysis input files (compared case-insensitively)
pub const ANALYSIS_EXTENSION: &str = "xlsx";

/// Filename prefix used by Excel for editor lock files
pub const LOCK_FILE_PREFIX: &str = "~$";

/// Mapping resource filename, co-located with the executable
pub const LANGUAGE_MAP_FILENAME: &str = "language-map.csv";

/// First field of the optional header line in the mapping resource
pub const LANGUAGE_MAP_HEADER_KEY: &str = "langCode";

// =============================================================================
// Output Workbook Constants
// =============================================================================

/// Worksheet name in the summary workbook
pub const REPORT_SHEET_NAME: &str = "Quote";

/// Header row of the summary sheet, in column order
pub const REPORT_HEADERS: &[&str] = &[
    "Target language",
    "Context Matches",
    "Repetitions",
    "100% match",
    "95-99%",
    "75-94%",
    "New Words",
    "Total words",
];

/// Prefix of the generated summary filename
pub const OUTPUT_FILE_PREFIX: &str = "Quote_";

/// Timestamp format embedded in the summary filename (local time)
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

// =============================================================================
// Helper Functions
// =============================================================================

/// Build the summary filename for a given timestamp string
pub fn output_filename(timestamp: &str) -> String {
    format!("{}{}.{}", OUTPUT_FILE_PREFIX, timestamp, ANALYSIS_EXTENSION)
}
