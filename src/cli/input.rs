//! User input utilities for interactive CLI prompts
//!
//! Folder prompts re-ask until an existing directory is entered; paths
//! pasted with surrounding quotes are accepted as-is.

use crate::{Error, Result};
use std::io::{self, Write};
use std::path::PathBuf;

/// Prompt for a directory path, re-prompting until an existing one is given
pub fn prompt_directory(message: &str) -> Result<PathBuf> {
    println!("{}", message);

    loop {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

        let trimmed = input.trim().trim_matches('"');
        if trimmed.is_empty() {
            println!("Entered path doesn't exist.");
            continue;
        }

        let path = PathBuf::from(trimmed);
        if !path.is_dir() {
            println!("Entered path doesn't exist.");
            continue;
        }

        return Ok(path);
    }
}

/// Hold the console open so the final summary stays readable
pub fn pause_before_exit() -> Result<()> {
    println!("Press Enter to exit.");

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    Ok(())
}
