//! Language code mapping and target-language resolution
//!
//! Loads the two-column `language-map.csv` resource into a case-insensitive
//! lookup table and extracts target-language codes from analysis file
//! headers.
//!
//! Resource format: UTF-8, comma-separated `code,displayName` pairs. Blank
//! lines and `#` comment lines are ignored, as is an optional header line
//! whose first field is `langCode`. Malformed lines are skipped silently
//! and duplicate codes resolve to the last entry.

use crate::constants::LANGUAGE_MAP_HEADER_KEY;
use crate::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Pattern extracting the code token from the target-language phrase,
/// e.g. "Target Language: EN-US" or "target language : zh_CN".
static TARGET_LANGUAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Target\s*Language\s*:\s*([A-Za-z]{2,3}(?:[_-][A-Za-z0-9]+)*)")
        .expect("target language pattern is valid")
});

/// Case-insensitive mapping from language code to display name.
///
/// Immutable after load; built once per run.
#[derive(Debug, Clone, Default)]
pub struct LanguageMap {
    entries: HashMap<String, String>,
}

impl LanguageMap {
    /// Load the mapping resource from a CSV file.
    ///
    /// Fails if the file does not exist or cannot be read; the run cannot
    /// produce meaningful language names without it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::language_map(
                path.display().to_string(),
                "mapping file not found",
            ));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .from_path(path)
            .map_err(|e| Error::language_map(path.display().to_string(), e.to_string()))?;

        let mut entries = HashMap::new();
        for record in reader.records() {
            let Ok(record) = record else {
                // Malformed line, skipped by contract
                continue;
            };
            if record.len() < 2 {
                continue;
            }

            let key = record[0].trim();
            if key.is_empty() || key.eq_ignore_ascii_case(LANGUAGE_MAP_HEADER_KEY) {
                continue;
            }

            // Display names may contain commas; rejoin any extra fields
            let value = record
                .iter()
                .skip(1)
                .collect::<Vec<_>>()
                .join(",")
                .trim()
                .to_string();
            if value.is_empty() {
                continue;
            }

            // Last entry wins on duplicate codes
            entries.insert(key.to_ascii_uppercase(), value);
        }

        debug!(
            "Loaded {} language mappings from {}",
            entries.len(),
            path.display()
        );
        Ok(Self { entries })
    }

    /// Number of loaded mappings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a code without any fallback behavior
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(&code.to_ascii_uppercase()).map(|s| s.as_str())
    }

    /// Resolve a language code to its display name.
    ///
    /// Unmapped non-empty codes pass through unchanged with an advisory
    /// warning; an empty code resolves to an empty name silently.
    pub fn resolve(&self, code: &str) -> String {
        if code.trim().is_empty() {
            return String::new();
        }

        match self.get(code) {
            Some(name) => name.to_string(),
            None => {
                warn!("Language code not supported: {}", code);
                code.to_string()
            }
        }
    }
}

/// Extract the target-language code from the validation cell text.
///
/// Hyphens are normalized to underscores; no match yields an empty string.
pub fn extract_language_code(header_text: &str) -> String {
    TARGET_LANGUAGE_RE
        .captures(header_text)
        .and_then(|caps| caps.get(1))
        .map(|code| code.as_str().replace('-', "_"))
        .unwrap_or_default()
}
