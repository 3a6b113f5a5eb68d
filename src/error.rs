use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid scoring constant: {0}")]
    InvalidConstant(String),

    #[error("Store Error: {0}")]
    Store(String),
}

pub type RsResult<T> = Result<T, RoadError>;
