use axum::extract::State;
use axum::response::Response;
use axum::Json;

use crate::application::ports::AiClient;
use crate::application::services::Base64Audio;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::types::{
    analysis_error_response, success_response, Base64AudioAnalysisRequest,
};
use crate::presentation::state::AppState;

/// Analyzes one or more Base64-encoded audio payloads.
#[tracing::instrument(skip(state, request))]
pub async fn from_base64_handler<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<Base64AudioAnalysisRequest>,
) -> Response
where
    C: AiClient + 'static,
{
    tracing::debug!(
        item_count = request.base64_audio_list.len(),
        prompt = %sanitize_prompt(&request.prompt),
        "Processing base64 audio analysis"
    );

    let items = request
        .base64_audio_list
        .into_iter()
        .map(|p| Base64Audio {
            mime_type: p.mime_type,
            data: p.data,
        })
        .collect();

    match state
        .analysis_service
        .analyze_base64(items, &request.prompt)
        .await
    {
        Ok(result) => success_response(result.text),
        Err(e) => analysis_error_response(e),
    }
}
