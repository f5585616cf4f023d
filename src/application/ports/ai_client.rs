use async_trait::async_trait;

use crate::domain::MediaItem;

/// Opaque multimodal AI backend, consumed as a synchronous
/// request/response collaborator. No streaming, no partial results.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Issues one generation call composed of a system instruction, the
    /// user prompt, and the ordered media sequence attached to the same
    /// user turn. Media order must be preserved into the wire request.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        media: &[MediaItem],
    ) -> Result<String, AiClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AiClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("media unavailable: {0}")]
    MediaUnavailable(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
