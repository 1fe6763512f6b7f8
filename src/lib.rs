//! # ingredient_stats
//!
//! Aggregates per-ingredient statistics from a pipe-delimited dataset of dishes:
//! the most frequent regions (`estados`), the most frequent cultures (`culturas`)
//! and one sample cultural note (`nota`) for each target ingredient.
//!
//! The work happens in one pass. [`aggregate_path`] (or [`aggregate_reader`])
//! builds an [`Aggregation`], [`Summary::from_aggregation`] ranks it, and
//! [`write_summary`] stores it as indented UTF-8 JSON.
//!
//! ## Example
//! ```no_run
//! use ingredient_stats::{StatsOptions, Summary, aggregate_path, write_summary};
//!
//! let opts = StatsOptions::default();
//! let agg = aggregate_path(&opts.input, &opts)?;
//! write_summary(&Summary::from_aggregation(&agg, opts.top_n), &opts.output)?;
//! # Ok::<(), ingredient_stats::StatsError>(())
//! ```

use std::path::PathBuf;

mod aggregate;
mod counter;
mod error;
mod summary;

pub use aggregate::{Aggregation, IngredientStats, RowCounts, aggregate_path, aggregate_reader};
pub use counter::FrequencyTable;
pub use error::StatsError;
pub use summary::{IngredientSummary, NameValue, Summary, write_summary};

pub const DEFAULT_INPUT: &str = "json/platillos_expandido.csv";
pub const DEFAULT_OUTPUT: &str = "json/ingredientes_stats.json";
pub const DEFAULT_INGREDIENTS: [&str; 5] = ["MAIZ", "FRIJOL", "CHILE", "CALABAZA", "CACAO"];
pub const DEFAULT_TOP_N: usize = 5;
/// Notes must be strictly longer than this many characters after trimming.
pub const DEFAULT_MIN_NOTE_LEN: usize = 10;

/// 0-based positions of the consumed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub ingredient: usize,
    pub region: usize,
    pub culture: usize,
    pub note: usize,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            ingredient: 13,
            region: 19,
            culture: 20,
            note: 21,
        }
    }
}

impl Columns {
    /// Rows with fewer fields than this are dropped.
    pub fn min_fields(&self) -> usize {
        self.ingredient
            .max(self.region)
            .max(self.culture)
            .max(self.note)
            + 1
    }
}

#[derive(Debug, Clone)]
pub struct StatsOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Matched case-sensitively against the trimmed ingredient field.
    pub ingredients: Vec<String>,
    pub columns: Columns,
    pub delimiter: u8,
    pub has_headers: bool,
    pub top_n: usize,
    pub min_note_len: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        StatsOptions {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            ingredients: DEFAULT_INGREDIENTS.iter().map(|s| s.to_string()).collect(),
            columns: Columns::default(),
            delimiter: b'|',
            has_headers: true,
            top_n: DEFAULT_TOP_N,
            min_note_len: DEFAULT_MIN_NOTE_LEN,
        }
    }
}

impl StatsOptions {
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.ingredients.is_empty() {
            return Err(StatsError::InvalidOptions(
                "at least one ingredient is required".into(),
            ));
        }
        if self.top_n == 0 {
            return Err(StatsError::InvalidOptions("top must be at least 1".into()));
        }
        if !self.delimiter.is_ascii() || self.delimiter == b'"' {
            return Err(StatsError::InvalidOptions(format!(
                "unsupported delimiter byte {:#04x}",
                self.delimiter
            )));
        }
        Ok(())
    }
}
