use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::AnalysisError;

/// Request body shared by the from-classpath and from-urls endpoints.
/// Fields default to empty so missing values surface as domain
/// validation errors rather than deserialization failures.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioAnalysisRequest {
    pub audio_urls: Vec<String>,
    pub prompt: String,
    pub file_name: String,
}

/// Request body for the from-base64 endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Base64AudioAnalysisRequest {
    pub base64_audio_list: Vec<Base64AudioPayload>,
    pub prompt: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Base64AudioPayload {
    pub mime_type: String,
    pub data: String,
}

/// Single response envelope for all analysis endpoints. On failure the
/// field carries the human-readable error message.
#[derive(Debug, Serialize)]
pub struct AudioAnalysisResponse {
    pub response: String,
}

/// Maps a domain error onto the fixed error envelope: 400 for every
/// request-side failure, 502 when the backend itself was unreachable.
pub fn analysis_error_response(err: AnalysisError) -> Response {
    let status = match &err {
        AnalysisError::Backend(_) => {
            tracing::error!(error = %err, "AI backend call failed");
            StatusCode::BAD_GATEWAY
        }
        _ => {
            tracing::warn!(error = %err, "Audio analysis request rejected");
            StatusCode::BAD_REQUEST
        }
    };

    (
        status,
        Json(AudioAnalysisResponse {
            response: err.to_string(),
        }),
    )
        .into_response()
}

pub fn success_response(text: String) -> Response {
    (StatusCode::OK, Json(AudioAnalysisResponse { response: text })).into_response()
}
