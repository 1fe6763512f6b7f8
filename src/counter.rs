use indexmap::IndexMap;

/// Counts occurrences of string keys, remembering the order in which each key
/// was first seen.
///
/// # Example
/// ```
/// use ingredient_stats::FrequencyTable;
/// let mut table = FrequencyTable::new();
/// for key in ["Oaxaca", "Puebla", "Puebla", "Yucatán"] {
///     table.increment(key);
/// }
/// let expected = vec![
///     ("Puebla".to_string(), 2),
///     ("Oaxaca".to_string(), 1),
/// ];
/// assert_eq!(table.most_common(2), expected);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_owned(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    ///Returns at most `n` entries sorted by count, highest first.
    ///Keys with equal counts stay in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut sorted: Vec<(&String, &u64)> = self.counts.iter().collect();
        // sort_by is stable, so insertion order survives among ties
        sorted.sort_by(|a, b| b.1.cmp(a.1));
        sorted
            .into_iter()
            .take(n)
            .map(|(key, count)| (key.clone(), *count))
            .collect()
    }
}
