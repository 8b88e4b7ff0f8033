use std::path::PathBuf;

use crate::analysis::{find_missing, MissingnessReport};
use crate::color::ColorMap;
use crate::data::filter::LabelPolicy;
use crate::data::model::Dataset;
use crate::error::{EdaError, Result};
use crate::figure::Figure;
use crate::plots::{
    plot_categorical, plot_categorical_bylabel, plot_numerical, plot_numerical_bylabel,
    CategoricalByLabelOptions, CategoricalPlotOptions, NumericalByLabelOptions,
    NumericalPlotOptions, DEFAULT_BINS,
};

/// Label column picked automatically when a dataset has one by this name.
pub const DEFAULT_LABEL_COLUMN: &str = "TARGET";

// ---------------------------------------------------------------------------
// What the central panel shows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Missingness,
    Categorical,
    Numerical,
    CategoricalByLabel,
    NumericalByLabel,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Missingness,
        ViewKind::Categorical,
        ViewKind::Numerical,
        ViewKind::CategoricalByLabel,
        ViewKind::NumericalByLabel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Missingness => "Missing values",
            ViewKind::Categorical => "Categorical counts",
            ViewKind::Numerical => "Numerical distribution",
            ViewKind::CategoricalByLabel => "Categorical by label",
            ViewKind::NumericalByLabel => "Numerical by label",
        }
    }

    pub fn uses_column(self) -> bool {
        self != ViewKind::Missingness
    }

    pub fn uses_label(self) -> bool {
        matches!(self, ViewKind::CategoricalByLabel | ViewKind::NumericalByLabel)
    }

    pub fn uses_bins(self) -> bool {
        matches!(self, ViewKind::Numerical | ViewKind::NumericalByLabel)
    }

    pub fn uses_title(self) -> bool {
        matches!(self, ViewKind::Categorical | ViewKind::CategoricalByLabel)
    }
}

pub enum View {
    Empty,
    Report(MissingnessReport),
    Figure { figure: Figure, colors: ColorMap },
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full explorer state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// File the dataset came from.
    pub source: Option<PathBuf>,

    pub kind: ViewKind,

    /// Column being summarised.
    pub column: Option<String>,

    /// Binary column used by the by-label views.
    pub label_column: Option<String>,

    pub bins: usize,

    /// Tick label rotation in degrees.
    pub label_rotation: f32,

    pub title: String,

    pub label_policy: LabelPolicy,

    /// Result of the last refresh.
    pub view: View,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source: None,
            kind: ViewKind::Missingness,
            column: None,
            label_column: None,
            bins: DEFAULT_BINS,
            label_rotation: 0.0,
            title: String::new(),
            label_policy: LabelPolicy::Drop,
            view: View::Empty,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, pick default columns and rebuild the view.
    pub fn set_dataset(&mut self, dataset: Dataset, source: Option<PathBuf>) {
        self.label_column = dataset
            .has_column(DEFAULT_LABEL_COLUMN)
            .then(|| DEFAULT_LABEL_COLUMN.to_string());
        self.column = dataset
            .column_names()
            .find(|name| Some(*name) != self.label_column.as_deref())
            .map(str::to_string);

        self.dataset = Some(dataset);
        self.source = source;
        self.refresh();
    }

    pub fn set_kind(&mut self, kind: ViewKind) {
        self.kind = kind;
        self.refresh();
    }

    pub fn set_column(&mut self, column: String) {
        self.column = Some(column);
        self.refresh();
    }

    pub fn set_label_column(&mut self, column: String) {
        self.label_column = Some(column);
        self.refresh();
    }

    /// Recompute the view after any selection change.
    pub fn refresh(&mut self) {
        match self.build_view() {
            Ok(view) => {
                self.view = view;
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("Cannot build {}: {e}", self.kind.label());
                self.view = View::Empty;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    fn build_view(&self) -> Result<View> {
        let Some(dataset) = &self.dataset else {
            return Ok(View::Empty);
        };

        let column = || {
            self.column
                .as_deref()
                .ok_or_else(|| EdaError::InvalidOption("no column selected".into()))
        };
        let label = || {
            self.label_column
                .as_deref()
                .ok_or_else(|| EdaError::InvalidOption("no label column selected".into()))
        };

        let figure = match self.kind {
            ViewKind::Missingness => return Ok(View::Report(find_missing(dataset)?)),
            ViewKind::Categorical => plot_categorical(
                dataset,
                column()?,
                &CategoricalPlotOptions {
                    label_rotation: self.label_rotation,
                    title: self.title.clone(),
                    ..Default::default()
                },
            )?,
            ViewKind::Numerical => plot_numerical(
                dataset,
                column()?,
                &NumericalPlotOptions {
                    bins: self.bins,
                    ..Default::default()
                },
            )?,
            ViewKind::CategoricalByLabel => plot_categorical_bylabel(
                dataset,
                column()?,
                label()?,
                &CategoricalByLabelOptions {
                    label_rotation: self.label_rotation,
                    title: self.title.clone(),
                    label_policy: self.label_policy,
                    ..Default::default()
                },
            )?,
            ViewKind::NumericalByLabel => plot_numerical_bylabel(
                dataset,
                column()?,
                label()?,
                &NumericalByLabelOptions {
                    bins: self.bins,
                    label_policy: self.label_policy,
                    ..Default::default()
                },
            )?,
        };

        let colors = ColorMap::for_figure(&figure);
        Ok(View::Figure { figure, colors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Column, Value};

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Column::new("SK_ID", [1i64, 2, 3, 4]),
            Column::new("TARGET", [1i64, 0, 0, 1]),
            Column::new("CODE_GENDER", ["F", "M", "F", "F"]),
            Column::new("AMT", [Value::Float(1.0), Value::Null, Value::Float(3.0), Value::Float(4.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn picks_target_as_label_and_shows_report() {
        let mut state = AppState::default();
        state.set_dataset(dataset(), None);
        assert_eq!(state.label_column.as_deref(), Some("TARGET"));
        assert_eq!(state.column.as_deref(), Some("SK_ID"));
        match &state.view {
            View::Report(report) => assert_eq!(report.get("AMT").unwrap().missing_count, 1),
            _ => panic!("expected missingness report"),
        }
    }

    #[test]
    fn by_label_view_builds_two_panels() {
        let mut state = AppState::default();
        state.set_dataset(dataset(), None);
        state.column = Some("CODE_GENDER".into());
        state.set_kind(ViewKind::CategoricalByLabel);
        match &state.view {
            View::Figure { figure, .. } => assert_eq!(figure.panels.len(), 2),
            _ => panic!("expected figure"),
        }
        assert!(state.status_message.is_none());
    }

    #[test]
    fn errors_become_status_messages() {
        let mut state = AppState::default();
        state.set_dataset(dataset(), None);
        state.set_column("CODE_GENDER".into());
        state.set_kind(ViewKind::Numerical);
        assert!(matches!(state.view, View::Empty));
        assert!(state.status_message.unwrap().contains("not numeric"));
    }

    #[test]
    fn by_label_without_label_column() {
        let ds = Dataset::new(vec![Column::new("x", [1.0, 2.0])]).unwrap();
        let mut state = AppState::default();
        state.set_dataset(ds, None);
        assert!(state.label_column.is_none());
        state.set_kind(ViewKind::NumericalByLabel);
        assert!(state.status_message.unwrap().contains("no label column"));
    }
}
