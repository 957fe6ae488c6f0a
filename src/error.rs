use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PulseError>;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GitHub API returned {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Missing field in payload: {0}")]
    MissingField(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Duplicate calendar date: {0}")]
    DuplicateDate(NaiveDate),
    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
