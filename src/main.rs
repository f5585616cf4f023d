use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use resona::application::services::{AnalysisService, MediaNormalizer};
use resona::infrastructure::llm::GeminiClient;
use resona::infrastructure::observability::{init_tracing, TracingConfig};
use resona::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().map_err(anyhow::Error::msg)?;

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    if settings.ai.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; backend calls will be rejected");
    }

    let ai_client = Arc::new(GeminiClient::new(
        settings.ai.api_key.clone(),
        settings.ai.model.clone(),
        settings.ai.base_url.clone(),
    ));

    let normalizer = MediaNormalizer::new(
        settings.media.bundled_dir.clone(),
        settings.media.fetch_timeout,
    )?;

    let analysis_service = Arc::new(AnalysisService::new(
        ai_client,
        normalizer,
        settings.ai.system_prompt.clone(),
    ));

    let state = AppState { analysis_service };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
