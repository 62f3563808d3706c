use dotenv::dotenv;
use llm_call::{CompletionOptions, Config, Message, OpenAiClient, RetryingCompletionClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("llm_call=info")),
        )
        .init();

    // Defaults to ./config.yaml; see demos/config.yaml for the expected shape.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| llm_call::config::DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?;

    let client = RetryingCompletionClient::from_config(OpenAiClient::from_env()?, &config)?;

    let result = client
        .complete(
            vec![
                Message::system("You are a concise, upbeat assistant."),
                Message::user("Share a fun fact about Rust programming."),
            ],
            &CompletionOptions::new(),
        )
        .await?;

    println!("Assistant:\n{}", result.text.as_deref().unwrap_or("<no content>"));
    println!("Usage: {:?}", result.usage);

    Ok(())
}
