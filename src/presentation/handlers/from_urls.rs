use axum::extract::State;
use axum::response::Response;
use axum::Json;

use crate::application::ports::AiClient;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::types::{
    analysis_error_response, success_response, AudioAnalysisRequest,
};
use crate::presentation::state::AppState;

/// Analyzes one or more audio files referenced by remote URLs.
#[tracing::instrument(skip(state, request))]
pub async fn from_urls_handler<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<AudioAnalysisRequest>,
) -> Response
where
    C: AiClient + 'static,
{
    tracing::debug!(
        url_count = request.audio_urls.len(),
        prompt = %sanitize_prompt(&request.prompt),
        "Processing URL audio analysis"
    );

    match state
        .analysis_service
        .analyze_urls(&request.audio_urls, &request.prompt)
        .await
    {
        Ok(result) => success_response(result.text),
        Err(e) => analysis_error_response(e),
    }
}
