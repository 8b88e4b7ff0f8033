use serde::{Deserialize, Serialize};

use super::model::Dataset;
use crate::error::{EdaError, Result};

// ---------------------------------------------------------------------------
// Label policy: what to do with rows whose label is neither 0 nor 1
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// Exclude unlabelled rows from both groups.
    #[default]
    Drop,
    /// Fail with [`EdaError::InvalidLabel`] on the first unlabelled row.
    Reject,
}

// ---------------------------------------------------------------------------
// Label split: row indices per group
// ---------------------------------------------------------------------------

/// Row indices partitioned by a binary label column.
///
/// Every row of the dataset appears in exactly one of the three lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSplit {
    /// Rows with label 1.
    pub positive: Vec<usize>,
    /// Rows with label 0.
    pub negative: Vec<usize>,
    /// Rows whose label is missing or not binary.
    pub excluded: Vec<usize>,
}

/// Partition the dataset rows by the value of `label_column`.
///
/// A row is assigned by its label cell alone:
/// * `1` / `1.0` / `true`  → positive
/// * `0` / `0.0` / `false` → negative
/// * anything else → excluded under [`LabelPolicy::Drop`], an error under
///   [`LabelPolicy::Reject`]
pub fn split_by_label(
    dataset: &Dataset,
    label_column: &str,
    policy: LabelPolicy,
) -> Result<LabelSplit> {
    let labels = dataset.column(label_column)?;
    let mut split = LabelSplit::default();

    for (row, value) in labels.values.iter().enumerate() {
        match value.as_binary_label() {
            Some(true) => split.positive.push(row),
            Some(false) => split.negative.push(row),
            None => match policy {
                LabelPolicy::Drop => split.excluded.push(row),
                LabelPolicy::Reject => {
                    return Err(EdaError::InvalidLabel {
                        column: label_column.to_string(),
                        row,
                        value: value.to_string(),
                    })
                }
            },
        }
    }

    if !split.excluded.is_empty() {
        log::warn!(
            "Dropped {} of {} rows with non-binary values in label column '{label_column}'",
            split.excluded.len(),
            dataset.len()
        );
    }

    Ok(split)
}
