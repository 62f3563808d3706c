use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Writing the result log failed after the remote call succeeded.
    #[error("Failed to write completion log to {}", .path.display())]
    LogPersistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every attempt failed. `source` is the error from the last attempt, or
    /// `None` when no attempt was made.
    #[error("LLM call repeatedly failed after {attempts} attempt(s){}", last_error_suffix(.source))]
    CallExhausted {
        attempts: u32,
        #[source]
        source: Option<Box<LlmError>>,
    },
}

fn last_error_suffix(source: &Option<Box<LlmError>>) -> String {
    match source {
        Some(err) => format!(": {err}"),
        None => String::new(),
    }
}

impl LlmError {
    /// The last attempt's error when this is [`LlmError::CallExhausted`].
    pub fn last_attempt_error(&self) -> Option<&LlmError> {
        match self {
            LlmError::CallExhausted { source, .. } => source.as_deref(),
            _ => None,
        }
    }

    /// HTTP status code carried by an [`LlmError::Api`] error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
