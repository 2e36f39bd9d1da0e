use thiserror::Error;

/// Application-level errors for ifsc-finder
#[derive(Debug, Clone, Error)]
pub enum FinderError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to start suggestion worker: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FinderError {
    fn from(err: std::io::Error) -> Self {
        FinderError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
