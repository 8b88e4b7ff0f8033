/// Data layer: core types, loading, and label partitioning.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  named columns, aligned rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  binary label column → row groups
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
