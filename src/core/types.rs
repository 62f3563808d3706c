use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Role tag of a conversation message.
///
/// Roles other than the three common ones (`tool`, `developer`, ...) are
/// carried through untouched in [`ChatRole::Other`]; the provider decides
/// whether they are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Other(String),
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::Other(role) => role,
        }
    }
}

impl From<String> for ChatRole {
    fn from(role: String) -> Self {
        match role.as_str() {
            "system" => ChatRole::System,
            "user" => ChatRole::User,
            "assistant" => ChatRole::Assistant,
            _ => ChatRole::Other(role),
        }
    }
}

impl From<&str> for ChatRole {
    fn from(role: &str) -> Self {
        ChatRole::from(role.to_string())
    }
}

impl From<ChatRole> for String {
    fn from(role: ChatRole) -> Self {
        match role {
            ChatRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<ChatRole>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Fully resolved generation parameters sent with every attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// A single chat-completion request as handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub messages: Vec<Message>,
    pub parameters: GenerationParameters,
}

/// Token accounting reported by the provider, flattened to name → number.
pub type Usage = BTreeMap<String, serde_json::Number>;

/// What a transport hands back for one successful call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatCompletionResponse {
    /// Content of the first choice's message, if the provider sent any.
    pub content: Option<String>,
    pub usage: Usage,
}

/// Normalized outcome of [`complete`](crate::RetryingCompletionClient::complete).
///
/// This is also exactly what gets written to the log store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub text: Option<String>,
    pub usage: Usage,
    pub model: String,
}
