use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::ports::AiClient;
use crate::application::services::UploadedAudio;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::types::{
    analysis_error_response, success_response, AudioAnalysisResponse,
};
use crate::presentation::state::AppState;

const FILES_FIELD: &str = "audioFiles";
const PROMPT_FIELD: &str = "prompt";

/// Analyzes one or more uploaded audio files from a multipart form
/// with `audioFiles` entries and a `prompt` field.
#[tracing::instrument(skip(state, multipart))]
pub async fn from_files_handler<C>(
    State(state): State<AppState<C>>,
    mut multipart: Multipart,
) -> Response
where
    C: AiClient + 'static,
{
    let mut files = Vec::new();
    let mut prompt = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart form");
                return multipart_error(format!("Failed to read multipart form: {}", e));
            }
        };

        let name = field.name().map(String::from);
        match name.as_deref() {
            Some(FILES_FIELD) => {
                let content_type = field.content_type().map(String::from);
                match field.bytes().await {
                    Ok(data) => files.push(UploadedAudio { content_type, data }),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read uploaded file");
                        return multipart_error(format!("Failed to read uploaded file: {}", e));
                    }
                }
            }
            Some(PROMPT_FIELD) => match field.text().await {
                Ok(text) => prompt = text,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read prompt field");
                    return multipart_error(format!("Failed to read prompt field: {}", e));
                }
            },
            _ => {}
        }
    }

    tracing::debug!(
        file_count = files.len(),
        prompt = %sanitize_prompt(&prompt),
        "Processing uploaded audio analysis"
    );

    match state.analysis_service.analyze_uploads(files, &prompt).await {
        Ok(result) => success_response(result.text),
        Err(e) => analysis_error_response(e),
    }
}

fn multipart_error(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(AudioAnalysisResponse { response: message }),
    )
        .into_response()
}
