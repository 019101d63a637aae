use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("CDP error: {0}")]
    Cdp(String),

    #[error("Script returned unexpected value: {0}")]
    Script(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

impl From<Error> for dirsubmit_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Browser(msg) | Error::Cdp(msg) => dirsubmit_core::Error::Browser(msg),
            other => dirsubmit_core::Error::Browser(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdp_message_keeps_single_prefix() {
        let err: dirsubmit_core::Error = Error::Cdp("Execution context was destroyed".to_string()).into();
        assert_eq!(err.to_string(), "Browser error: Execution context was destroyed");
    }

    #[test]
    fn test_browser_message_keeps_single_prefix() {
        let err: dirsubmit_core::Error = Error::Browser("Session already closed".to_string()).into();
        assert_eq!(err.to_string(), "Browser error: Session already closed");
    }

    #[test]
    fn test_io_error_keeps_its_context() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no chrome");
        let err: dirsubmit_core::Error = Error::Io(io).into();
        assert_eq!(err.to_string(), "Browser error: IO error: no chrome");
    }
}
