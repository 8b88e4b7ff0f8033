//! Chart builders.
//!
//! Each function reads a [`Dataset`], computes the frequency table or the
//! binned distribution it needs, and returns a [`Figure`] owned by the
//! caller. Nothing is drawn until the figure is passed to
//! [`crate::ui::show`].

use serde::{Deserialize, Serialize};

use crate::analysis::{density, histogram, value_counts, value_counts_at};
use crate::data::filter::{split_by_label, LabelPolicy};
use crate::data::model::{Column, Dataset};
use crate::error::{EdaError, Result};
use crate::figure::{BarSeries, DistributionSeries, Figure, FigureSize, Panel, PanelContent};

pub const DEFAULT_BINS: usize = 50;

const POSITIVE_PREFIX: &str = "Default: ";
const NEGATIVE_PREFIX: &str = "Non-default: ";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalPlotOptions {
    pub size: FigureSize,
    /// Degrees; 0 keeps tick labels horizontal.
    pub label_rotation: f32,
    pub title: String,
}

impl Default for CategoricalPlotOptions {
    fn default() -> Self {
        Self {
            size: FigureSize::new(8.0, 4.0),
            label_rotation: 0.0,
            title: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericalPlotOptions {
    pub size: FigureSize,
    pub bins: usize,
}

impl Default for NumericalPlotOptions {
    fn default() -> Self {
        Self {
            size: FigureSize::new(8.0, 4.0),
            bins: DEFAULT_BINS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalByLabelOptions {
    pub size: FigureSize,
    pub label_rotation: f32,
    pub title: String,
    pub label_policy: LabelPolicy,
}

impl Default for CategoricalByLabelOptions {
    fn default() -> Self {
        Self {
            size: FigureSize::new(12.0, 6.0),
            label_rotation: 0.0,
            title: String::new(),
            label_policy: LabelPolicy::Drop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericalByLabelOptions {
    pub size: FigureSize,
    pub bins: usize,
    pub label_policy: LabelPolicy,
}

impl Default for NumericalByLabelOptions {
    fn default() -> Self {
        Self {
            size: FigureSize::new(12.0, 6.0),
            bins: DEFAULT_BINS,
            label_policy: LabelPolicy::Drop,
        }
    }
}

// ---------------------------------------------------------------------------
// Categorical
// ---------------------------------------------------------------------------

/// Bar chart of the value counts of `column`, most frequent first.
pub fn plot_categorical(
    dataset: &Dataset,
    column: &str,
    options: &CategoricalPlotOptions,
) -> Result<Figure> {
    let col = dataset.column(column)?;
    let counts = value_counts(col);

    Ok(Figure::new(options.size).with_panel(Panel {
        title: options.title.clone(),
        x_label: column.to_string(),
        y_label: "count".to_string(),
        content: PanelContent::Bars(BarSeries::from_counts(&counts, options.label_rotation)),
    }))
}

/// Side-by-side bar charts of `column` for label 1 (left) and label 0 (right).
pub fn plot_categorical_bylabel(
    dataset: &Dataset,
    column: &str,
    label_column: &str,
    options: &CategoricalByLabelOptions,
) -> Result<Figure> {
    let col = dataset.column(column)?;
    let split = split_by_label(dataset, label_column, options.label_policy)?;

    let groups = [
        (POSITIVE_PREFIX, &split.positive),
        (NEGATIVE_PREFIX, &split.negative),
    ];

    let mut figure = Figure::new(options.size);
    for (prefix, rows) in groups {
        let counts = value_counts_at(col, rows.iter().copied());
        figure = figure.with_panel(Panel {
            title: format!("{prefix}{}", options.title),
            x_label: column.to_string(),
            y_label: "count".to_string(),
            content: PanelContent::Bars(BarSeries::from_counts(&counts, options.label_rotation)),
        });
    }
    Ok(figure)
}

// ---------------------------------------------------------------------------
// Numerical
// ---------------------------------------------------------------------------

/// Histogram with a density overlay of the non-missing values of `column`.
pub fn plot_numerical(
    dataset: &Dataset,
    column: &str,
    options: &NumericalPlotOptions,
) -> Result<Figure> {
    check_bins(options.bins)?;
    let col = dataset.column(column)?;
    let values = col.numeric_values()?;
    let panel = distribution_panel(col, &values, options.bins, "all rows", String::new())?;
    Ok(Figure::new(options.size).with_panel(panel))
}

/// Side-by-side distributions of `column` for label 1 (left) and label 0 (right).
pub fn plot_numerical_bylabel(
    dataset: &Dataset,
    column: &str,
    label_column: &str,
    options: &NumericalByLabelOptions,
) -> Result<Figure> {
    check_bins(options.bins)?;
    let col = dataset.column(column)?;
    let split = split_by_label(dataset, label_column, options.label_policy)?;

    let groups = [
        (POSITIVE_PREFIX, &split.positive, "label 1 rows"),
        (NEGATIVE_PREFIX, &split.negative, "label 0 rows"),
    ];

    let mut figure = Figure::new(options.size);
    for (prefix, rows, group) in groups {
        let values = col.numeric_values_at(rows.iter().copied())?;
        let panel = distribution_panel(col, &values, options.bins, group, prefix.to_string())?;
        figure = figure.with_panel(panel);
    }
    Ok(figure)
}

fn check_bins(bins: usize) -> Result<()> {
    if bins == 0 {
        return Err(EdaError::InvalidOption("bin count must be at least 1".into()));
    }
    Ok(())
}

fn distribution_panel(
    col: &Column,
    values: &[f64],
    bins: usize,
    group: &str,
    title_prefix: String,
) -> Result<Panel> {
    if values.is_empty() {
        return Err(EdaError::InsufficientData {
            column: col.name.clone(),
            group: group.to_string(),
        });
    }
    Ok(Panel {
        title: format!("{title_prefix}Distribution of {}", col.name),
        x_label: col.name.clone(),
        y_label: "density".to_string(),
        content: PanelContent::Distribution(DistributionSeries {
            histogram: histogram(values, bins)?,
            density: density(values),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Value;

    fn credit() -> Dataset {
        Dataset::new(vec![
            Column::new("TARGET", [1i64, 1, 0, 0, 2]),
            Column::new("X", ["a", "b", "a", "c", "a"]),
            Column::new(
                "AMT",
                [
                    Value::Float(10.0),
                    Value::Float(12.0),
                    Value::Null,
                    Value::Float(3.0),
                    Value::Float(5.0),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn categorical_bars_follow_counts() {
        let opts = CategoricalPlotOptions {
            label_rotation: 45.0,
            title: "train set: X".into(),
            ..Default::default()
        };
        let fig = plot_categorical(&credit(), "X", &opts).unwrap();
        assert_eq!(fig.size, FigureSize::new(8.0, 4.0));
        assert_eq!(fig.panels.len(), 1);
        let panel = &fig.panels[0];
        assert_eq!(panel.title, "train set: X");
        let bars = panel.bars().unwrap();
        assert_eq!(bars.categories, vec!["a", "b", "c"]);
        assert_eq!(bars.counts, vec![3, 1, 1]);
        assert_eq!(bars.label_rotation, 45.0);
    }

    #[test]
    fn categorical_unknown_column() {
        let err = plot_categorical(&credit(), "Y", &Default::default()).unwrap_err();
        assert!(matches!(err, EdaError::ColumnNotFound { .. }));
    }

    #[test]
    fn categorical_bylabel_titles_and_groups() {
        let opts = CategoricalByLabelOptions {
            title: "X".into(),
            ..Default::default()
        };
        let fig = plot_categorical_bylabel(&credit(), "X", "TARGET", &opts).unwrap();
        assert_eq!(fig.size, FigureSize::new(12.0, 6.0));
        assert_eq!(fig.panels[0].title, "Default: X");
        assert_eq!(fig.panels[1].title, "Non-default: X");

        let left = fig.panels[0].bars().unwrap();
        assert_eq!(left.categories, vec!["a", "b"]);
        assert_eq!(left.counts, vec![1, 1]);

        let right = fig.panels[1].bars().unwrap();
        assert_eq!(right.categories, vec!["a", "c"]);
        assert_eq!(right.counts, vec![1, 1]);
    }

    #[test]
    fn categorical_bylabel_reject_policy() {
        let opts = CategoricalByLabelOptions {
            label_policy: LabelPolicy::Reject,
            ..Default::default()
        };
        let err = plot_categorical_bylabel(&credit(), "X", "TARGET", &opts).unwrap_err();
        assert!(matches!(err, EdaError::InvalidLabel { row: 4, .. }));
    }

    #[test]
    fn categorical_signed_zeros_share_a_bar() {
        let ds = Dataset::new(vec![Column::new("x", [0.0, -0.0, 0.0])]).unwrap();
        let fig = plot_categorical(&ds, "x", &Default::default()).unwrap();
        let bars = fig.panels[0].bars().unwrap();
        assert_eq!(bars.categories, vec!["0"]);
        assert_eq!(bars.counts, vec![3]);
    }

    #[test]
    fn numerical_drops_missing() {
        let fig = plot_numerical(&credit(), "AMT", &NumericalPlotOptions { bins: 3, ..Default::default() })
            .unwrap();
        let panel = &fig.panels[0];
        assert_eq!(panel.title, "Distribution of AMT");
        let dist = panel.distribution().unwrap();
        assert_eq!(dist.histogram.n_bins(), 3);
        assert_eq!(dist.histogram.counts.iter().sum::<usize>(), 4);
        assert!(dist.density.is_some());
    }

    #[test]
    fn numerical_rejects_text_and_zero_bins() {
        assert!(matches!(
            plot_numerical(&credit(), "X", &Default::default()),
            Err(EdaError::NonNumericColumn { .. })
        ));
        assert!(matches!(
            plot_numerical(&credit(), "AMT", &NumericalPlotOptions { bins: 0, ..Default::default() }),
            Err(EdaError::InvalidOption(_))
        ));
    }

    #[test]
    fn numerical_rejects_infinity() {
        let ds = Dataset::new(vec![Column::new("v", [1.0, 2.0, 3.0, f64::INFINITY])]).unwrap();
        let err = plot_numerical(&ds, "v", &NumericalPlotOptions { bins: 4, ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, EdaError::NonFiniteValue { row: 3, .. }));
    }

    #[test]
    fn numerical_all_missing_is_insufficient() {
        let ds = Dataset::new(vec![Column::new("v", [Value::Null, Value::Null])]).unwrap();
        assert!(matches!(
            plot_numerical(&ds, "v", &Default::default()),
            Err(EdaError::InsufficientData { .. })
        ));
    }

    #[test]
    fn numerical_bylabel_panels() {
        let opts = NumericalByLabelOptions {
            size: FigureSize::new(10.0, 5.0),
            bins: 4,
            ..Default::default()
        };
        let fig = plot_numerical_bylabel(&credit(), "AMT", "TARGET", &opts).unwrap();
        assert_eq!(fig.size, FigureSize::new(10.0, 5.0));
        assert_eq!(fig.panels[0].title, "Default: Distribution of AMT");
        assert_eq!(fig.panels[1].title, "Non-default: Distribution of AMT");

        let left = fig.panels[0].distribution().unwrap();
        assert_eq!(left.histogram.counts.iter().sum::<usize>(), 2);
        // label 0 rows are {2, 3}; row 2 is missing
        let right = fig.panels[1].distribution().unwrap();
        assert_eq!(right.histogram.counts.iter().sum::<usize>(), 1);
        assert!(right.density.is_none());
    }

    #[test]
    fn numerical_bylabel_reject_policy() {
        let opts = NumericalByLabelOptions {
            label_policy: LabelPolicy::Reject,
            ..Default::default()
        };
        let err = plot_numerical_bylabel(&credit(), "AMT", "TARGET", &opts).unwrap_err();
        assert!(matches!(err, EdaError::InvalidLabel { row: 4, value, .. } if value == "2"));

        // Drop keeps going and ignores row 4.
        let fig = plot_numerical_bylabel(&credit(), "AMT", "TARGET", &Default::default()).unwrap();
        let shown: usize = fig
            .panels
            .iter()
            .filter_map(|p| p.distribution())
            .map(|d| d.histogram.counts.iter().sum::<usize>())
            .sum();
        assert_eq!(shown, 3);
    }

    #[test]
    fn numerical_bylabel_empty_group() {
        let ds = Dataset::new(vec![
            Column::new("TARGET", [0i64, 0]),
            Column::new("v", [1.0, 2.0]),
        ])
        .unwrap();
        let err = plot_numerical_bylabel(&ds, "v", "TARGET", &Default::default()).unwrap_err();
        assert!(matches!(err, EdaError::InsufficientData { group, .. } if group == "label 1 rows"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: NumericalByLabelOptions = serde_json::from_str(r#"{"bins": 20}"#).unwrap();
        assert_eq!(opts.bins, 20);
        assert_eq!(opts.size, FigureSize::new(12.0, 6.0));
        assert_eq!(opts.label_policy, LabelPolicy::Drop);

        let opts: CategoricalByLabelOptions =
            serde_json::from_str(r#"{"label_policy": "reject"}"#).unwrap();
        assert_eq!(opts.label_policy, LabelPolicy::Reject);
    }
}
