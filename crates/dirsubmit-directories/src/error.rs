use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Directory not found: {key}. Available directories: {}", available.join(", "))]
    DirectoryNotFound { key: String, available: Vec<String> },

    #[error("Duplicate directory key: {0}")]
    DuplicateKey(String),

    #[error("Invalid site definition '{key}': {reason}")]
    InvalidSite { key: String, reason: String },

    #[error("Failed to read site definitions: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse site definitions: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<dirsubmit_core::Error> for Error {
    fn from(err: dirsubmit_core::Error) -> Self {
        match err {
            dirsubmit_core::Error::InvalidEntry { key, reason } => Error::InvalidSite { key, reason },
            other => Error::InvalidSite {
                key: String::new(),
                reason: other.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
