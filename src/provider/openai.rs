//! OpenAI chat-completions transport.
//!
//! Unused response fields are kept (with `#[allow(dead_code)]`) so the
//! structs mirror the API contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiKey, constants::openai};
use crate::core::{
    ChatCompletionRequest, ChatCompletionResponse, ChatCompletionTransport, HttpClient,
    HttpClientConfig, LlmError, Message, Usage,
};

pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub http_config: HttpClientConfig,
}

impl OpenAiConfig {
    pub fn new(api_key: ApiKey) -> Result<Self, LlmError> {
        Ok(Self {
            api_key: api_key.resolve(openai::API_KEY_ENV_VAR)?,
            base_url: openai::API_BASE.to_string(),
            http_config: HttpClientConfig::default(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    fn auth_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            openai::CHAT_COMPLETIONS_ENDPOINT
        )
    }
}

pub struct OpenAiClient {
    config: OpenAiConfig,
    http: HttpClient,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let http = HttpClient::new(&config.http_config)?;
        Ok(Self { config, http })
    }

    /// Client authenticated with `OPENAI_API_KEY` against the public API.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(OpenAiConfig::new(ApiKey::Default)?)
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

#[async_trait]
impl ChatCompletionTransport for OpenAiClient {
    #[tracing::instrument(
        name = "openai_chat_completion",
        skip(self, request),
        fields(model = %request.parameters.model, messages = request.messages.len()),
        err
    )]
    async fn create(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let body = ChatRequest {
            model: &request.parameters.model,
            messages: &request.messages,
            temperature: request.parameters.temperature,
            max_tokens: request.parameters.max_tokens,
        };

        let headers = [self.config.auth_header()];
        let response: ChatResponse = self
            .http
            .post_json(&self.config.url(), &headers, &body)
            .await?;

        create_core_response(response)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[allow(dead_code)]
    #[serde(default)]
    id: Option<String>,

    #[allow(dead_code)]
    #[serde(default)]
    model: Option<String>,

    #[serde(default)]
    choices: Vec<Choice>,

    #[serde(default)]
    usage: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[allow(dead_code)]
    #[serde(default)]
    index: u32,

    message: ChoiceMessage,

    #[allow(dead_code)]
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    /// This is always `assistant`
    #[allow(dead_code)]
    #[serde(default)]
    role: Option<String>,

    #[serde(default)]
    content: Option<String>,
}

fn create_core_response(res: ChatResponse) -> Result<ChatCompletionResponse, LlmError> {
    let choice = res.choices.into_iter().next().ok_or_else(|| LlmError::Parse {
        message: "No choices in response".to_string(),
        source: "empty `choices` array".into(),
    })?;

    Ok(ChatCompletionResponse {
        content: choice.message.content,
        usage: normalize_usage(res.usage),
    })
}

/// Keep the numeric top-level counters of a usage object. Nested detail
/// objects and nulls are dropped.
fn normalize_usage(usage: Option<Value>) -> Usage {
    match usage {
        Some(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Number(n) => Some((key, n)),
                _ => None,
            })
            .collect(),
        _ => Usage::new(),
    }
}
