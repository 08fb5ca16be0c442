use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Municipality dataset unavailable: {0}")]
    DataUnavailable(String),

    #[error("Municipality dataset has no {field} column (tried: {aliases})")]
    MissingColumn {
        field: &'static str,
        aliases: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// True for failures that make the location feature unusable: the dataset
    /// could not be read or parsed, or a required column is missing.
    pub fn is_data_error(&self) -> bool {
        matches!(self, AppError::DataUnavailable(_) | AppError::MissingColumn { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
