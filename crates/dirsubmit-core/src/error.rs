use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Project not found: {key}. Available projects: {}", available.join(", "))]
    ProjectNotFound { key: String, available: Vec<String> },

    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("Invalid entry '{key}': {reason}")]
    InvalidEntry { key: String, reason: String },

    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("No element matched field '{field}' (tried: {})", tried.join(", "))]
    NoMatchingElement { field: String, tried: Vec<String> },

    #[error("Browser error: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, Error>;
