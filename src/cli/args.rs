//! Command-line argument definitions for the quote aggregator
//!
//! The tool is interactive by default (folder prompts, exit pause) to stay
//! usable for double-click users; every prompt has a flag equivalent so
//! scripted runs can pass everything up front.

use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the XTM quote aggregator
///
/// Aggregates a folder of XTM analysis spreadsheets into one summary
/// workbook, mapping target-language codes to display names.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "xtm-quote",
    version,
    about = "Aggregate XTM analysis spreadsheets into a single quote summary",
    long_about = "Reads every .xlsx analysis file in a folder, validates it against the \
                  fixed XTM template, aggregates the word counts into quote buckets and \
                  writes one sorted summary workbook. Folders not given as flags are \
                  prompted for interactively."
)]
pub struct Args {
    /// Folder containing the analysis .xlsx files
    ///
    /// Prompted for interactively when not given.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Folder containing the analysis .xlsx files"
    )]
    pub input_path: Option<PathBuf>,

    /// Folder the summary workbook is written into
    ///
    /// Prompted for interactively when not given.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Folder the summary workbook is written into"
    )]
    pub output_path: Option<PathBuf>,

    /// Path to the language mapping resource
    ///
    /// Defaults to language-map.csv next to the executable, then the
    /// current directory.
    #[arg(
        long = "map",
        value_name = "FILE",
        help = "Path to language-map.csv (default: next to the executable)"
    )]
    pub map_path: Option<PathBuf>,

    /// Run non-interactively
    ///
    /// Requires --input and --output; skips the exit pause.
    #[arg(
        long = "batch",
        help = "Run non-interactively (requires --input and --output)"
    )]
    pub batch: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress progress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate argument combinations before any processing starts
    pub fn validate(&self) -> Result<()> {
        if self.batch {
            if self.input_path.is_none() || self.output_path.is_none() {
                return Err(Error::configuration(
                    "--batch requires both --input and --output".to_string(),
                ));
            }
        }

        if let Some(input_path) = &self.input_path {
            if !input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is not an existing directory: {}",
                    input_path.display()
                )));
            }
        }

        if let Some(output_path) = &self.output_path {
            if !output_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is not an existing directory: {}",
                    output_path.display()
                )));
            }
        }

        if let Some(map_path) = &self.map_path {
            if !map_path.is_file() {
                return Err(Error::configuration(format!(
                    "Mapping file does not exist: {}",
                    map_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the progress bar (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_with_paths(input: Option<PathBuf>, output: Option<PathBuf>) -> Args {
        Args {
            input_path: input,
            output_path: output,
            map_path: None,
            batch: false,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_validate_accepts_existing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out");
        fs::create_dir(&output).unwrap();

        let args = args_with_paths(Some(temp_dir.path().to_path_buf()), Some(output));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_input() {
        let args = args_with_paths(Some(PathBuf::from("/nonexistent/path")), None);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_file_as_input() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("analysis.xlsx");
        fs::write(&file, "stub").unwrap();

        let args = args_with_paths(Some(file), None);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_batch_requires_both_paths() {
        let temp_dir = TempDir::new().unwrap();

        let mut args = args_with_paths(Some(temp_dir.path().to_path_buf()), None);
        args.batch = true;
        assert!(args.validate().is_err());

        args.output_path = Some(temp_dir.path().to_path_buf());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_map_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = args_with_paths(None, None);
        args.map_path = Some(temp_dir.path().join("missing.csv"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = args_with_paths(None, None);
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = args_with_paths(None, None);
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }
}
