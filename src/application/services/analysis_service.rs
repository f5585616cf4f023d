use std::sync::Arc;

use crate::application::ports::AiClient;
use crate::application::services::{
    AnalysisError, Base64Audio, MediaNormalizer, UploadedAudio,
};
use crate::domain::{AnalysisResult, MediaItem};

/// Exact phrase the backend is instructed to emit when a prompt is
/// off-topic. Matched case-insensitively after the call returns.
pub const OFF_TOPIC_SENTINEL: &str =
    "Error: I can only analyze audio and answer related questions.";

/// Single choke point for every analysis request. All four public
/// entry points validate the prompt, normalize their input shape, and
/// funnel into one backend call with a guardrail check on the reply.
///
/// Stateless: each call is independent, with no session or
/// conversation memory.
pub struct AnalysisService<C>
where
    C: AiClient,
{
    ai_client: Arc<C>,
    normalizer: MediaNormalizer,
    system_prompt: String,
}

impl<C> AnalysisService<C>
where
    C: AiClient,
{
    pub fn new(ai_client: Arc<C>, normalizer: MediaNormalizer, system_prompt: String) -> Self {
        Self {
            ai_client,
            normalizer,
            system_prompt,
        }
    }

    /// Analyzes a single audio file shipped with the service.
    pub async fn analyze_bundled(
        &self,
        file_name: &str,
        prompt: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        validate_prompt(prompt)?;
        let item = self.normalizer.from_bundled(file_name).await?;
        self.perform_analysis(prompt, vec![item]).await
    }

    /// Analyzes one or more uploaded audio files.
    pub async fn analyze_uploads(
        &self,
        files: Vec<UploadedAudio>,
        prompt: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        validate_prompt(prompt)?;
        let media = self.normalizer.from_uploads(files)?;
        self.perform_analysis(prompt, media).await
    }

    /// Analyzes one or more audio files referenced by URL.
    pub async fn analyze_urls(
        &self,
        urls: &[String],
        prompt: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        validate_prompt(prompt)?;
        let media = self.normalizer.from_urls(urls).await?;
        self.perform_analysis(prompt, media).await
    }

    /// Analyzes one or more Base64-encoded audio payloads.
    pub async fn analyze_base64(
        &self,
        items: Vec<Base64Audio>,
        prompt: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        validate_prompt(prompt)?;
        let media = self.normalizer.from_base64(items)?;
        self.perform_analysis(prompt, media).await
    }

    /// One backend call plus the guardrail. The media check is repeated
    /// here even though normalizers validate their own input, since a
    /// normalizer may legitimately filter everything out.
    async fn perform_analysis(
        &self,
        prompt: &str,
        media: Vec<MediaItem>,
    ) -> Result<AnalysisResult, AnalysisError> {
        if media.is_empty() {
            return Err(AnalysisError::NoValidMedia);
        }

        let text = self
            .ai_client
            .generate(&self.system_prompt, prompt, &media)
            .await?;

        // Advisory guardrail: catches the documented compliant failure
        // mode, not arbitrary off-topic leakage. Exact match only.
        if text.eq_ignore_ascii_case(OFF_TOPIC_SENTINEL) {
            tracing::info!("Backend declined prompt as off-topic");
            return Err(AnalysisError::OffTopic);
        }

        Ok(AnalysisResult { text })
    }
}

fn validate_prompt(prompt: &str) -> Result<(), AnalysisError> {
    if prompt.trim().is_empty() {
        return Err(AnalysisError::EmptyInput("prompt"));
    }
    Ok(())
}
