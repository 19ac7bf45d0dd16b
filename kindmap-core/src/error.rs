use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown station code: {0}")]
    StationNotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
