use std::sync::Arc;

use valq_engine::QuestionPipeline;
use valq_llm::{OpenRouterConfig, OpenRouterModel, QuestionGenerator};
use valq_server::ServerConfig;

#[tokio::main]
async fn main() {
    // .env first so both the filter and the provider config can come from it
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("starting valq server");

    let provider_config = OpenRouterConfig::from_env();
    if !provider_config.has_credentials() {
        tracing::warn!(
            "OPENROUTER_API_KEY is not set; every request will be served from the fallback bank"
        );
    }

    let model = Arc::new(OpenRouterModel::new(provider_config));
    let generator = QuestionGenerator::with_defaults(model);
    let pipeline = Arc::new(QuestionPipeline::new(generator));

    let config = ServerConfig::from_env();
    let handle = valq_server::start(config, pipeline)
        .await
        .expect("failed to bind server address");

    tracing::info!(port = handle.port, "valq ready");

    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");

    tracing::info!("shutting down");
}
