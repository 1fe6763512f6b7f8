use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::StatsOptions;
use crate::counter::FrequencyTable;
use crate::error::StatsError;

/// Running tallies for one target ingredient.
#[derive(Debug, Clone, Default)]
pub struct IngredientStats {
    regions: FrequencyTable,
    cultures: FrequencyTable,
    notes: IndexSet<String>,
}

impl IngredientStats {
    pub fn regions(&self) -> &FrequencyTable {
        &self.regions
    }

    pub fn cultures(&self) -> &FrequencyTable {
        &self.cultures
    }

    /// Distinct qualifying notes, in the order they were first read.
    pub fn notes(&self) -> &IndexSet<String> {
        &self.notes
    }

    /// The first qualifying note seen in file order.
    pub fn sample_note(&self) -> Option<&str> {
        self.notes.first().map(String::as_str)
    }
}

/// How the rows of one pass were disposed of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub read: u64,
    pub too_short: u64,
    pub not_targeted: u64,
    pub matched: u64,
}

/// Result of a single pass over the dataset, keyed by target ingredient in
/// target order. Every target is present even when no row matched it.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    ingredients: IndexMap<String, IngredientStats>,
    rows: RowCounts,
}

impl Aggregation {
    fn with_targets(targets: &[String]) -> Self {
        let mut ingredients = IndexMap::with_capacity(targets.len());
        for target in targets {
            ingredients.entry(target.clone()).or_default();
        }
        Aggregation {
            ingredients,
            rows: RowCounts::default(),
        }
    }

    pub fn stats(&self, ingredient: &str) -> Option<&IngredientStats> {
        self.ingredients.get(ingredient)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IngredientStats)> {
        self.ingredients
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn rows(&self) -> RowCounts {
        self.rows
    }
}

/// Tally regions, cultures and notes per target ingredient from delimited text.
///
/// Rows with fewer fields than the highest configured column are dropped, as are
/// rows whose trimmed ingredient is not an exact (case-sensitive) target match.
/// Empty region and culture values are not counted. Notes are kept only when their
/// trimmed length exceeds `opts.min_note_len` characters.
///
/// # Example
/// ```
/// use ingredient_stats::{StatsOptions, aggregate_reader};
/// let mut row = vec![""; 22];
/// row[13] = "CHILE";
/// row[19] = "Puebla";
/// let data = format!("header\n{}\n{}\n", row.join("|"), row.join("|"));
/// let agg = aggregate_reader(data.as_bytes(), &StatsOptions::default()).unwrap();
/// assert_eq!(agg.stats("CHILE").unwrap().regions().get("Puebla"), 2);
/// ```
pub fn aggregate_reader<R: Read>(
    reader: R,
    opts: &StatsOptions,
) -> Result<Aggregation, StatsError> {
    opts.validate()?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(opts.has_headers)
        .flexible(true)
        .from_reader(reader);
    if opts.has_headers {
        // read_record skips the header without reporting its decode errors
        rdr.headers()?;
    }

    let mut agg = Aggregation::with_targets(&opts.ingredients);
    let min_fields = opts.columns.min_fields();
    let cols = opts.columns;
    let mut record = csv::StringRecord::new();

    while rdr.read_record(&mut record)? {
        agg.rows.read += 1;
        if record.len() < min_fields {
            agg.rows.too_short += 1;
            continue;
        }

        let field = |idx: usize| record.get(idx).unwrap_or_default().trim();
        let Some(stats) = agg.ingredients.get_mut(field(cols.ingredient)) else {
            agg.rows.not_targeted += 1;
            continue;
        };
        agg.rows.matched += 1;

        let region = field(cols.region);
        if !region.is_empty() {
            stats.regions.increment(region);
        }

        let culture = field(cols.culture);
        if !culture.is_empty() {
            stats.cultures.increment(culture);
        }

        let note = field(cols.note);
        if note.chars().count() > opts.min_note_len && !stats.notes.contains(note) {
            stats.notes.insert(note.to_owned());
        }
    }

    debug!(
        "read {} rows: {} matched, {} too short, {} not targeted",
        agg.rows.read, agg.rows.matched, agg.rows.too_short, agg.rows.not_targeted
    );
    Ok(agg)
}

/// Open `path` and aggregate it. A missing or unreadable file is an error.
pub fn aggregate_path<P: AsRef<Path>>(
    path: P,
    opts: &StatsOptions,
) -> Result<Aggregation, StatsError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StatsError::io(path, e))?;
    debug!("aggregating {}", path.display());
    aggregate_reader(file, opts)
}
