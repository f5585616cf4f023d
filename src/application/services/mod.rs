mod analysis_error;
mod analysis_service;
mod media_normalizer;

pub use analysis_error::AnalysisError;
pub use analysis_service::{AnalysisService, OFF_TOPIC_SENTINEL};
pub use media_normalizer::{
    determine_audio_mime_type, validate_audio_content_type, Base64Audio, MediaNormalizer,
    UploadedAudio,
};
