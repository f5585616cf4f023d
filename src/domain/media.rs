use bytes::Bytes;

/// Default MIME type assumed when an input carries no usable hint.
pub const DEFAULT_AUDIO_MIME: &str = "audio/mp3";

/// One normalized audio input: a MIME type plus a reference to the bytes.
///
/// All four delivery mechanisms (bundled asset, upload, remote URL,
/// Base64 payload) converge on this shape, so downstream code never
/// branches on input origin. Immutable once constructed and discarded
/// after the backend call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub mime_type: String,
    pub source: MediaSource,
}

/// Where the audio content lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Payload already held in memory.
    Bytes(Bytes),
    /// Remote resource fetched lazily when the backend request is built.
    Url(String),
}

impl MediaItem {
    pub fn from_bytes(mime_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            mime_type: mime_type.into(),
            source: MediaSource::Bytes(data.into()),
        }
    }

    pub fn from_url(mime_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            source: MediaSource::Url(url.into()),
        }
    }
}

/// Final text produced by the AI backend for one analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub text: String,
}
