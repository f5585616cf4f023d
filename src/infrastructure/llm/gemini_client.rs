use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::application::ports::{AiClient, AiClientError};
use crate::domain::{MediaItem, MediaSource};
use crate::infrastructure::llm::gemini_types::{
    Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// `AiClient` backed by the Gemini `generateContent` endpoint. Media
/// is attached as inline base64 data on the user turn; URL sources are
/// downloaded here, at request-build time.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
        }
    }

    async fn inline_part(&self, item: &MediaItem) -> Result<Part, AiClientError> {
        let bytes = match &item.source {
            MediaSource::Bytes(b) => b.clone(),
            MediaSource::Url(url) => self
                .http
                .get(url)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| AiClientError::MediaUnavailable(format!("{}: {}", url, e)))?
                .bytes()
                .await
                .map_err(|e| AiClientError::MediaUnavailable(format!("{}: {}", url, e)))?,
        };

        Ok(Part::InlineData {
            inline_data: InlineData {
                mime_type: item.mime_type.clone(),
                data: BASE64.encode(&bytes),
            },
        })
    }
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        media: &[MediaItem],
    ) -> Result<String, AiClientError> {
        let mut parts = Vec::with_capacity(media.len() + 1);
        parts.push(Part::Text {
            text: user_prompt.to_string(),
        });
        for item in media {
            parts.push(self.inline_part(item).await?);
        }

        let request = GenerateContentRequest {
            system_instruction: Content::system(system_prompt),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        tracing::debug!(model = %self.model, media_count = media.len(), "Calling Gemini");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AiClientError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AiClientError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiClientError::InvalidResponse(format!("body: {}", e)))?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AiClientError::InvalidResponse("no candidates returned".to_string()))?;

        let text = candidate.content.joined_text();

        tracing::info!(chars = text.len(), "Gemini generation completed");

        Ok(text)
    }
}
