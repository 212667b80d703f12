use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AppError {
    /// A required column is missing from the CSV header row.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A cell failed to parse. `row` is the 1-based data row, header excluded.
    #[error("Parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Io(format!("CSV error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

// Alias for convenience
pub type Error = AppError;
