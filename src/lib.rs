//! # llm-call
//!
//! One retrying chat-completion call: defaults come from a YAML config file,
//! failed attempts back off linearly, and every successful result is written
//! to `{save_dir}/llm_{unix_seconds}.json`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use llm_call::{CompletionOptions, Config, Message, OpenAiClient, RetryingCompletionClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.yaml")?;
//!     let client = RetryingCompletionClient::from_config(OpenAiClient::from_env()?, &config)?;
//!
//!     let result = client
//!         .complete(
//!             vec![Message::user("Summarize the borrow checker in one sentence.")],
//!             &CompletionOptions::new().temperature(0.0),
//!         )
//!         .await?;
//!
//!     println!("{}", result.text.unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Failure behaviour
//!
//! Any error from an attempt is logged with `tracing::warn!` and retried until
//! `retries` attempts have run, after which [`LlmError::CallExhausted`] is
//! returned with the last attempt's error as its source. A content-less
//! response is a success with `text: None`. A failure to write the log file
//! is returned as [`LlmError::LogPersistence`] even though the remote call
//! succeeded.

pub mod config;
pub mod core;
pub mod provider;

pub use config::{Config, OpenAiDefaults, ProjectConfig};
pub use crate::core::{
    ChatCompletionRequest, ChatCompletionResponse, ChatCompletionTransport, ChatRole,
    CompletionOptions, CompletionResult, GenerationParameters, HttpClientConfig, LlmError,
    LogStore, Message, RetryingCompletionClient, Usage,
};
pub use provider::{ApiKey, OpenAiClient, OpenAiConfig};
