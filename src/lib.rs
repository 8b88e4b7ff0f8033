//! Exploratory data analysis helpers.
//!
//! * [`find_missing`] – per-column missing counts and ratios
//! * [`plot_categorical`] / [`plot_numerical`] – value counts and distributions
//! * [`plot_categorical_bylabel`] / [`plot_numerical_bylabel`] – the same,
//!   split by a binary label column into two side-by-side panels
//!
//! Plot functions return a [`Figure`]; [`ui::show`] draws it in a window.
//!
//! ```
//! use rusty_eda::{find_missing, Column, Dataset, Value};
//!
//! let ds = Dataset::new(vec![
//!     Column::new("A", [Value::Integer(1), Value::Null, Value::Integer(3)]),
//!     Column::new("B", [Value::Null, Value::Null, Value::Null]),
//! ])
//! .unwrap();
//! let report = find_missing(&ds).unwrap();
//! assert_eq!(report.get("B").unwrap().missing_ratio, 1.0);
//! ```

pub mod analysis;
pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod figure;
pub mod plots;
pub mod state;
pub mod ui;

pub use analysis::{find_missing, MissingnessReport, MissingnessRow, ValueCounts};
pub use data::filter::{split_by_label, LabelPolicy, LabelSplit};
pub use data::loader::load_file;
pub use data::model::{Column, Dataset, Value};
pub use error::{EdaError, Result};
pub use figure::{Figure, FigureSize, Panel, PanelContent};
pub use plots::{
    plot_categorical, plot_categorical_bylabel, plot_numerical, plot_numerical_bylabel,
    CategoricalByLabelOptions, CategoricalPlotOptions, NumericalByLabelOptions,
    NumericalPlotOptions,
};
