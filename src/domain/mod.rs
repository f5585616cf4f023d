mod media;

pub use media::{AnalysisResult, MediaItem, MediaSource, DEFAULT_AUDIO_MIME};
