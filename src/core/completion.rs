//! The retrying chat-completion call.

use std::time::Duration;

use tracing::warn;

use super::{
    error::LlmError,
    log_store::LogStore,
    traits::ChatCompletionTransport,
    types::{ChatCompletionRequest, CompletionResult, GenerationParameters, Message},
};
use crate::config::Config;

pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

/// Per-call overrides and retry policy.
///
/// Unset generation fields fall back to the client's configured defaults.
/// An explicit `temperature(0.0)` is an override, not "unset".
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    /// Total number of attempts, including the first
    pub retries: u32,
    /// Multiplied by the attempt number to get the delay after a failure
    pub backoff: Duration,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: None,
            temperature: None,
            max_tokens: None,
            retries: DEFAULT_RETRIES,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl CompletionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Negative or non-finite values mean no delay.
    pub fn backoff_seconds(mut self, seconds: f64) -> Self {
        self.backoff = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO);
        self
    }

    pub fn resolve(&self, defaults: &GenerationParameters) -> GenerationParameters {
        GenerationParameters {
            model: self
                .model
                .clone()
                .unwrap_or_else(|| defaults.model.clone()),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
        }
    }
}

/// Delay slept after attempt `attempt` (1-based) fails.
pub fn backoff_delay(backoff: Duration, attempt: u32) -> Duration {
    backoff.saturating_mul(attempt)
}

/// Calls a chat-completion transport with linear backoff and logs every
/// successful result to a [`LogStore`].
pub struct RetryingCompletionClient<T: ChatCompletionTransport> {
    transport: T,
    defaults: GenerationParameters,
    log_store: LogStore,
}

impl<T: ChatCompletionTransport> RetryingCompletionClient<T> {
    pub fn new(transport: T, defaults: GenerationParameters, log_store: LogStore) -> Self {
        Self {
            transport,
            defaults,
            log_store,
        }
    }

    /// Build a client from loaded configuration, creating the save directory.
    pub fn from_config(transport: T, config: &Config) -> Result<Self, LlmError> {
        let log_store = config.prepare_save_dir()?;
        Ok(Self::new(transport, config.default_parameters(), log_store))
    }

    pub fn defaults(&self) -> &GenerationParameters {
        &self.defaults
    }

    pub fn log_store(&self) -> &LogStore {
        &self.log_store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run up to `options.retries` attempts and return the first success.
    ///
    /// After failed attempt `k` the call sleeps `options.backoff * k`, the
    /// last attempt included. A successful response is written to the log
    /// store before returning; if that write fails the error is returned and
    /// no further attempts are made.
    #[tracing::instrument(
        name = "llm_complete",
        skip(self, messages, options),
        fields(model = tracing::field::Empty, retries = options.retries),
        err
    )]
    pub async fn complete(
        &self,
        messages: Vec<Message>,
        options: &CompletionOptions,
    ) -> Result<CompletionResult, LlmError> {
        let parameters = options.resolve(&self.defaults);
        tracing::Span::current().record("model", parameters.model.as_str());

        let request = ChatCompletionRequest {
            messages,
            parameters,
        };
        let retries = options.retries;
        let mut last_error: Option<LlmError> = None;

        for attempt in 1..=retries {
            match self.transport.create(&request).await {
                Ok(response) => {
                    let result = CompletionResult {
                        text: response.content,
                        usage: response.usage,
                        model: request.parameters.model.clone(),
                    };
                    self.log_store.persist(&result).await?;
                    return Ok(result);
                }
                Err(e) => {
                    warn!(
                        attempt,
                        retries,
                        error = %e,
                        "LLM call failed (attempt {attempt}/{retries})"
                    );
                    last_error = Some(e);
                    tokio::time::sleep(backoff_delay(options.backoff, attempt)).await;
                }
            }
        }

        Err(LlmError::CallExhausted {
            attempts: retries,
            source: last_error.map(Box::new),
        })
    }
}
