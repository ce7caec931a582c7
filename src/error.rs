use thiserror::Error;

pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to open workbook: {0}")]
    Workbook(String),

    #[error("Worksheet named '{sheet}' not found")]
    SheetNotFound { sheet: String },

    #[error("Failed to read worksheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },

    #[error("Output is not a '{0}' data file")]
    Format(String),
}
