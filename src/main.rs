use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use healthcare_chatbot::config::Config;
use healthcare_chatbot::routes;
use healthcare_chatbot::services::generator::HuggingFaceGenerator;
use healthcare_chatbot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("healthcare_chatbot=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let generator = HuggingFaceGenerator::new(
        &config.hf_api_url,
        &config.hf_model,
        config.hf_api_token.clone(),
        config.generation_timeout,
    )
    .context("failed to build text generation client")?;
    info!(endpoint = generator.endpoint(), "text generation model ready");

    let state = Arc::new(AppState::new(Arc::new(generator)));
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("healthcare chatbot running at http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
