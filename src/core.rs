pub mod completion;
pub mod error;
pub mod http;
pub mod log_store;
pub mod traits;
pub mod types;

pub use completion::{CompletionOptions, RetryingCompletionClient, backoff_delay};
pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig};
pub use log_store::LogStore;
pub use traits::ChatCompletionTransport;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatRole, CompletionResult,
    GenerationParameters, Message, Usage,
};
