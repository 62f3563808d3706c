mod constants;
pub(crate) mod openai;

pub use openai::{OpenAiClient, OpenAiConfig};

use crate::core::LlmError;

/// Where a provider's API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Read the provider's conventional environment variable
    Default,
    Custom(String),
}

impl ApiKey {
    pub(crate) fn resolve(&self, env_var: &str) -> Result<String, LlmError> {
        match self {
            ApiKey::Custom(key) => Ok(key.clone()),
            ApiKey::Default => std::env::var(env_var)
                .map_err(|_| LlmError::ProviderConfiguration(format!("{env_var} not set."))),
        }
    }
}
