//! Per-column missing-value report.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::data::model::Dataset;
use crate::error::{EdaError, Result};

/// Missing-value summary for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingnessRow {
    pub column: String,
    pub missing_count: usize,
    pub missing_ratio: f64,
}

/// One [`MissingnessRow`] per dataset column, in dataset column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MissingnessReport {
    rows: Vec<MissingnessRow>,
}

/// Count missing cells per column and divide by the dataset row count.
///
/// Fails with [`EdaError::EmptyDataset`] when the dataset has no rows,
/// since the ratio is undefined.
pub fn find_missing(dataset: &Dataset) -> Result<MissingnessReport> {
    if dataset.is_empty() {
        return Err(EdaError::EmptyDataset);
    }
    let total = dataset.len() as f64;

    let rows = dataset
        .columns()
        .iter()
        .map(|col| {
            let missing_count = col.missing_count();
            MissingnessRow {
                column: col.name.clone(),
                missing_count,
                missing_ratio: missing_count as f64 / total,
            }
        })
        .collect::<Vec<_>>();

    log::debug!(
        "Missingness: {} of {} columns have missing values",
        rows.iter().filter(|r| r.missing_count > 0).count(),
        rows.len()
    );

    Ok(MissingnessReport { rows })
}

impl MissingnessReport {
    pub fn rows(&self) -> &[MissingnessRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a column, by name.
    pub fn get(&self, column: &str) -> Option<&MissingnessRow> {
        self.rows.iter().find(|r| r.column == column)
    }

    /// Write `column,missing_count,missing_ratio` records with a header.
    pub fn to_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for MissingnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.column.len())
            .max()
            .unwrap_or(0)
            .max("column".len());
        writeln!(f, "{:<width$}  {:>13}  {:>13}", "column", "missing_count", "missing_ratio")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<width$}  {:>13}  {:>13.6}",
                row.column, row.missing_count, row.missing_ratio
            )?;
        }
        Ok(())
    }
}
