//! Category frequency tables.

use std::collections::HashMap;

use serde::Serialize;

use crate::data::model::{Column, Value};

/// Distinct values of a column with their counts, most frequent first.
///
/// Ties keep the order in which each value first appears. Missing cells
/// are not counted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValueCounts {
    entries: Vec<(Value, usize)>,
}

impl ValueCounts {
    pub fn entries(&self) -> &[(Value, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for one value, zero if absent.
    pub fn count_of(&self, value: &Value) -> usize {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map_or(0, |(_, c)| *c)
    }

    /// Sum of all counts (number of non-missing cells).
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

/// Frequency table over every row of the column.
pub fn value_counts(column: &Column) -> ValueCounts {
    value_counts_at(column, 0..column.values.len())
}

/// Frequency table over the given rows of the column.
pub fn value_counts_at(column: &Column, rows: impl IntoIterator<Item = usize>) -> ValueCounts {
    let mut index: HashMap<&Value, usize> = HashMap::new();
    let mut entries: Vec<(Value, usize)> = Vec::new();

    for row in rows {
        let value = &column.values[row];
        if value.is_missing() {
            continue;
        }
        match index.get(value) {
            Some(&slot) => entries[slot].1 += 1,
            None => {
                index.insert(value, entries.len());
                entries.push((value.clone(), 1));
            }
        }
    }

    // Stable sort: equal counts stay in first-appearance order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    log::debug!(
        "Value counts for '{}': {} distinct values",
        column.name,
        entries.len()
    );

    ValueCounts { entries }
}
