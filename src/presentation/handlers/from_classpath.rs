use axum::extract::State;
use axum::response::Response;
use axum::Json;

use crate::application::ports::AiClient;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::types::{
    analysis_error_response, success_response, AudioAnalysisRequest,
};
use crate::presentation::state::AppState;

/// Analyzes a single audio file bundled with the service, referenced
/// by name.
#[tracing::instrument(skip(state, request))]
pub async fn from_classpath_handler<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<AudioAnalysisRequest>,
) -> Response
where
    C: AiClient + 'static,
{
    tracing::debug!(
        file_name = %request.file_name,
        prompt = %sanitize_prompt(&request.prompt),
        "Processing bundled audio analysis"
    );

    match state
        .analysis_service
        .analyze_bundled(&request.file_name, &request.prompt)
        .await
    {
        Ok(result) => success_response(result.text),
        Err(e) => analysis_error_response(e),
    }
}
