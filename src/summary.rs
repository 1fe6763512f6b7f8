use std::fs::File;
use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregation;
use crate::counter::FrequencyTable;
use crate::error::StatsError;

/// One ranked entry, e.g. `{"name": "Oaxaca", "value": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSummary {
    pub estados: Vec<NameValue>,
    pub culturas: Vec<NameValue>,
    pub nota: String,
}

/// Final per-ingredient report, keyed by lower-cased ingredient name in target order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary {
    pub entries: IndexMap<String, IngredientSummary>,
}

fn ranked(table: &FrequencyTable, top_n: usize) -> Vec<NameValue> {
    table
        .most_common(top_n)
        .into_iter()
        .map(|(name, value)| NameValue { name, value })
        .collect()
}

impl Summary {
    pub fn from_aggregation(agg: &Aggregation, top_n: usize) -> Self {
        let mut entries = IndexMap::new();
        for (name, stats) in agg.iter() {
            let summary = IngredientSummary {
                estados: ranked(stats.regions(), top_n),
                culturas: ranked(stats.cultures(), top_n),
                nota: stats.sample_note().unwrap_or_default().to_owned(),
            };
            entries.insert(name.to_lowercase(), summary);
        }
        Summary { entries }
    }

    pub fn get(&self, key: &str) -> Option<&IngredientSummary> {
        self.entries.get(key)
    }

    /// Two-space indented JSON with non-ASCII text left unescaped.
    pub fn to_json_pretty(&self) -> Result<String, StatsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

///Write the summary to `path`, replacing whatever the file held before.
pub fn write_summary<P: AsRef<Path>>(summary: &Summary, path: P) -> Result<(), StatsError> {
    let path = path.as_ref();
    let json = summary.to_json_pretty()?;
    let mut file = File::create(path).map_err(|e| StatsError::io(path, e))?;
    file.write_all(json.as_bytes()).map_err(|e| StatsError::io(path, e))?;
    info!("wrote {} ingredients to {}", summary.entries.len(), path.display());
    Ok(())
}
