//! Command execution for the quote aggregator CLI
//!
//! Drives the whole run: logging setup, folder resolution, discovery,
//! the sequential per-file extraction loop and the final summary report.
//!
//! Per-file failures never abort the run; they become skip counts and
//! status lines. Only startup conditions (no input files, missing mapping
//! resource) and failure to write the output workbook are fatal.

use crate::app::models::QuoteRow;
use crate::app::services::{analysis_reader, discovery, language_map, quote_writer::QuoteReport};
use crate::cli::args::Args;
use crate::cli::input;
use crate::constants::{output_filename, LANGUAGE_MAP_FILENAME, OUTPUT_TIMESTAMP_FORMAT};
use crate::{Error, LanguageMap, Result};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Statistics for one aggregation run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of analysis files discovered
    pub files_found: usize,
    /// Number of files that produced a summary row
    pub processed: usize,
    /// Number of files skipped (damaged or wrong template)
    pub skipped: usize,
    /// Path of the written summary workbook
    pub output_path: PathBuf,
    /// Total run time
    pub elapsed: std::time::Duration,
}

/// Main command runner for the quote aggregator
///
/// Orchestrates the workflow:
/// 1. Set up logging and validate arguments
/// 2. Resolve the input folder and discover analysis files
/// 3. Resolve the output folder and load the language map
/// 4. Extract every file sequentially, containing per-file failures
/// 5. Write the sorted summary workbook and report counts
pub fn run(args: &Args) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args)?;

    info!("Starting XTM quote aggregation");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let input_folder = match &args.input_path {
        Some(path) => path.clone(),
        None => input::prompt_directory("Enter the path to the folder with XTM analysis files:")?,
    };

    let files = discovery::discover_analysis_files(&input_folder)?;
    if files.is_empty() {
        return Err(Error::no_input_files(input_folder.display().to_string()));
    }

    println!("Number of analysis files found: {}", files.len());
    for file in &files {
        println!(" - {}", display_name(file));
    }

    let output_folder = match &args.output_path {
        Some(path) => path.clone(),
        None => input::prompt_directory("Enter the path where the quote summary should be placed:")?,
    };

    let map_path = resolve_map_path(args);
    let map = LanguageMap::load(&map_path)?;
    println!("Mapping file loaded ({} languages)", map.len());

    let progress = if args.show_progress() {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("progress template is valid")
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let (report, processed, skipped) = process_files(&files, &map, progress.as_ref());

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    let timestamp = chrono::Local::now()
        .format(OUTPUT_TIMESTAMP_FORMAT)
        .to_string();
    let output_path = output_folder.join(output_filename(&timestamp));
    report.write(&output_path)?;

    let stats = RunStats {
        files_found: files.len(),
        processed,
        skipped,
        output_path,
        elapsed: start_time.elapsed(),
    };

    print_summary(&stats);
    Ok(stats)
}

/// Extract every file in discovery order, containing per-file failures.
///
/// Returns the accumulated report plus processed and skipped counts. Each
/// workbook handle is scoped to its own iteration; a file that cannot be
/// read or lacks the template marker yields a status line and a skip.
pub fn process_files(
    files: &[PathBuf],
    map: &LanguageMap,
    progress: Option<&ProgressBar>,
) -> (QuoteReport, usize, usize) {
    let mut report = QuoteReport::new();
    let mut processed = 0;
    let mut skipped = 0;

    for path in files {
        let name = display_name(path);
        if let Some(pb) = progress {
            pb.set_message(name.clone());
        }
        debug!("Processing file: {}", name);

        match analysis_reader::read_analysis(path) {
            Ok(analysis) => {
                let code = language_map::extract_language_code(&analysis.target_header);
                let language = map.resolve(&code);
                report.push(QuoteRow {
                    language,
                    counts: analysis.counts,
                });
                processed += 1;
            }
            Err(Error::InvalidTemplate { .. }) => {
                say(
                    progress,
                    &format!("Skipping {} - invalid template/layout", name),
                );
                skipped += 1;
            }
            Err(error) => {
                debug!("Workbook rejected: {}", error);
                say(
                    progress,
                    &format!("Skipping {} - file is damaged, open or not a valid .xlsx", name),
                );
                skipped += 1;
            }
        }

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    (report, processed, skipped)
}

/// Print a status line without disturbing the progress bar
fn say(progress: Option<&ProgressBar>, line: &str) {
    match progress {
        Some(pb) => pb.println(line),
        None => println!("{}", line),
    }
}

/// File name for console output, falling back to the full path
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Resolve the mapping resource location.
///
/// Explicit flag first, then next to the executable, then the current
/// directory. Existence is checked by the loader so a missing resource
/// reports one consistent fatal error.
fn resolve_map_path(args: &Args) -> PathBuf {
    if let Some(path) = &args.map_path {
        return path.clone();
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(LANGUAGE_MAP_FILENAME);
            if candidate.is_file() {
                return candidate;
            }
        }
    }

    PathBuf::from(LANGUAGE_MAP_FILENAME)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("xtm_quote={}", log_level)));

    // Logs go to stderr so prompts and the summary stay clean on stdout
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the final run summary
fn print_summary(stats: &RunStats) {
    println!();
    println!("{}", "Quote summary complete".green().bold());
    println!("  Output: {}", stats.output_path.display());
    println!("  Processed: {}, skipped: {}", stats.processed, stats.skipped);
    println!("  Elapsed: {}", HumanDuration(stats.elapsed));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/tmp/quotes/report.xlsx")), "report.xlsx");
    }

    #[test]
    fn test_process_files_with_no_files() {
        let map = LanguageMap::default();
        let (report, processed, skipped) = process_files(&[], &map, None);
        assert!(report.is_empty());
        assert_eq!(processed, 0);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn test_process_files_skips_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.xlsx");
        fs::write(&path, "not really a workbook").unwrap();

        let map = LanguageMap::default();
        let (report, processed, skipped) = process_files(&[path], &map, None);
        assert!(report.is_empty());
        assert_eq!(processed, 0);
        assert_eq!(skipped, 1);
    }
}
