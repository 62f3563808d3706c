//! Thin JSON-over-HTTP wrapper shared by providers.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::LlmError;

/// Settings for the underlying reqwest client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for a single request
    pub timeout: Duration,
    /// Overrides the default `llm-call/<version>` user agent
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: None,
        }
    }
}

fn default_user_agent() -> String {
    format!("llm-call/{}", env!("CARGO_PKG_VERSION"))
}

/// Single-shot HTTP client. Every call is exactly one request; retries belong
/// to the completion client.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, LlmError> {
        let ua = config
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(ua)
            .build()
            .map_err(|e| {
                LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// POST `body` as JSON and decode a JSON response.
    ///
    /// Non-2xx statuses become [`LlmError::Api`] with the status code and the
    /// response body as message.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| LlmError::Network {
            message: "Request failed".to_string(),
            source: Box::new(e),
        })?;

        let status = res.status();
        if !status.is_success() {
            warn!(status = %status, "API returned error status");
            let error_text = res
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(LlmError::Api {
                message: format!("{status}: {error_text}"),
                status_code: Some(status.as_u16()),
                source: None,
            });
        }

        debug!(status = %status, "HTTP request successful");

        let response_text = res.text().await.map_err(|e| LlmError::Network {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        serde_json::from_str(&response_text).map_err(|e| LlmError::Parse {
            message: "Failed to parse API response".to_string(),
            source: Box::new(e),
        })
    }
}
