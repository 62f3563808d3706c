use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{ChatCompletionRequest, ChatCompletionResponse},
};

/// One round trip to a chat-completion endpoint.
///
/// Implementations make exactly one request per call and leave retrying to
/// [`RetryingCompletionClient`](crate::RetryingCompletionClient).
#[async_trait]
pub trait ChatCompletionTransport: Send + Sync {
    async fn create(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError>;
}
