//! Errors raised while encoding rows into an output format.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV: {0}")]
    CsvFlush(String),

    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to format output: {0}")]
    Format(#[from] std::fmt::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
