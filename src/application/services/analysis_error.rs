use crate::application::ports::AiClientError;

/// Everything that can go wrong between receiving a request and
/// returning the backend's text. One kind per condition; raised at the
/// point of detection and propagated unchanged to the HTTP boundary.
/// Underlying causes are kept as sources for diagnostics, never
/// serialized to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),
    #[error("audio file not found: {name}")]
    NotFound { name: String },
    #[error("base64 audio data and mime type cannot be empty")]
    InvalidInput,
    #[error("invalid or non-audio mime type for url: {url}")]
    InvalidMimeType { url: String },
    #[error("failed to fetch audio from url: {url}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid base64 data provided")]
    DecodeFailed(#[source] base64::DecodeError),
    #[error("no valid audio files were provided for analysis")]
    NoValidMedia,
    #[error("the provided prompt is not related to audio analysis")]
    OffTopic,
    #[error("ai backend call failed")]
    Backend(#[from] AiClientError),
}
