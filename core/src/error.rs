use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("Invalid input: {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RoiResult<T> = Result<T, RoiError>;
