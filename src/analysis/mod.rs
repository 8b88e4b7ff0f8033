//! Pure computations behind the reports and charts.

pub mod counts;
pub mod distribution;
pub mod missing;

pub use counts::{value_counts, value_counts_at, ValueCounts};
pub use distribution::{density, histogram, DensityCurve, Histogram};
pub use missing::{find_missing, MissingnessReport, MissingnessRow};
