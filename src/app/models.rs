//! Domain models for quote aggregation
//!
//! Word counts extracted from one analysis file and the summary row they
//! become after language resolution.

/// Word counts aggregated into the six quote buckets.
///
/// The total is always derived from the six fields and never stored, so it
/// cannot drift out of sync with them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordBuckets {
    pub context_matches: i64,
    pub repetitions: i64,
    pub match_100: i64,
    pub match_95_99: i64,
    pub match_75_94: i64,
    pub new_words: i64,
}

impl WordBuckets {
    /// Build buckets from values in template-table order
    pub fn from_totals(totals: [i64; 6]) -> Self {
        Self {
            context_matches: totals[0],
            repetitions: totals[1],
            match_100: totals[2],
            match_95_99: totals[3],
            match_75_94: totals[4],
            new_words: totals[5],
        }
    }

    /// Bucket values in output column order
    pub fn as_columns(&self) -> [i64; 6] {
        [
            self.context_matches,
            self.repetitions,
            self.match_100,
            self.match_95_99,
            self.match_75_94,
            self.new_words,
        ]
    }

    /// Total word count across all six buckets
    pub fn total_words(&self) -> i64 {
        self.as_columns().iter().sum()
    }
}

/// One row of the summary sheet: resolved language plus its word counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRow {
    /// Display name of the target language, or the raw code if unmapped
    pub language: String,
    pub counts: WordBuckets,
}

/// Metadata read from one analysis file before language resolution
#[derive(Debug, Clone)]
pub struct AnalysisCounts {
    /// Full text of the validation cell, holding the target-language phrase
    pub target_header: String,
    pub counts: WordBuckets,
}
