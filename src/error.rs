use thiserror::Error;

/// All errors produced by the analysis and plotting layer.
#[derive(Debug, Error)]
pub enum EdaError {
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    #[error("column '{name}' appears more than once")]
    DuplicateColumn { name: String },

    #[error("column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("column '{column}' has no non-missing values in {group}")]
    InsufficientData { column: String, group: String },

    #[error("column '{column}' is not numeric (row {row})")]
    NonNumericColumn { column: String, row: usize },

    #[error("column '{column}' has a non-finite value at row {row}")]
    NonFiniteValue { column: String, row: usize },

    #[error("label column '{column}' has non-binary value '{value}' at row {row}")]
    InvalidLabel {
        column: String,
        row: usize,
        value: String,
    },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("could not open display window: {0}")]
    Display(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EdaError>;
