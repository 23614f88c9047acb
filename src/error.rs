use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrghistError>;

#[derive(Error, Debug)]
pub enum OrghistError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status} for {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },
    #[error("Pagination error: {0}")]
    Pagination(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
