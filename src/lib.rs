//! XTM Quote Aggregator Library
//!
//! A Rust library for aggregating XTM translation analysis spreadsheets
//! into a single quote summary workbook.
//!
//! This library provides tools for:
//! - Discovering analysis `.xlsx` files in a folder, skipping editor lock files
//! - Validating each file against the fixed XTM analysis template layout
//! - Reading word counts from fixed cell addresses with lenient numeric coercion
//! - Resolving target-language codes to display names via `language-map.csv`
//! - Writing a sorted, formatted summary sheet with per-language totals

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analysis_reader;
        pub mod discovery;
        pub mod language_map;
        pub mod quote_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{QuoteRow, WordBuckets};
pub use app::services::language_map::LanguageMap;

/// Result type alias for the quote aggregator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for quote aggregation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or read
    #[error("Workbook error in file '{file}': {message}")]
    Workbook {
        file: String,
        message: String,
        #[source]
        source: Option<calamine::XlsxError>,
    },

    /// Analysis file does not match the expected XTM template layout
    #[error("File '{file}' does not match the XTM analysis template")]
    InvalidTemplate { file: String },

    /// Language map resource missing or unreadable
    #[error("Language map error for '{path}': {message}")]
    LanguageMap { path: String, message: String },

    /// Writing the summary workbook failed
    #[error("Report writing error: {message}")]
    ReportWriting {
        message: String,
        #[source]
        source: Option<rust_xlsxwriter::XlsxError>,
    },

    /// No analysis files found in the input folder
    #[error("No .xlsx analysis files found in '{path}'")]
    NoInputFiles { path: String },

    /// Invalid cell reference in the template table
    #[error("Invalid cell reference: '{address}'")]
    CellReference { address: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workbook error with context
    pub fn workbook(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<calamine::XlsxError>,
    ) -> Self {
        Self::Workbook {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid template error
    pub fn invalid_template(file: impl Into<String>) -> Self {
        Self::InvalidTemplate { file: file.into() }
    }

    /// Create a language map error
    pub fn language_map(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LanguageMap {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a report writing error
    pub fn report_writing(
        message: impl Into<String>,
        source: Option<rust_xlsxwriter::XlsxError>,
    ) -> Self {
        Self::ReportWriting {
            message: message.into(),
            source,
        }
    }

    /// Create a no-input-files error
    pub fn no_input_files(path: impl Into<String>) -> Self {
        Self::NoInputFiles { path: path.into() }
    }

    /// Create a cell reference error
    pub fn cell_reference(address: impl Into<String>) -> Self {
        Self::CellReference {
            address: address.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::ReportWriting {
            message: "Failed to write summary workbook".to_string(),
            source: Some(error),
        }
    }
}
