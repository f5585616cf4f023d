use std::path::PathBuf;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;

use crate::application::services::AnalysisError;
use crate::domain::{MediaItem, DEFAULT_AUDIO_MIME};

/// An uploaded audio file as received by the multipart handler: the
/// client-supplied content-type hint plus the raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// One wire-level Base64 audio entry: declared MIME type plus the
/// encoded payload.
#[derive(Debug, Clone)]
pub struct Base64Audio {
    pub mime_type: String,
    pub data: String,
}

/// Converts the four heterogeneous input shapes (bundled asset, upload,
/// remote URL, Base64 string) into `MediaItem`s, or fails with a
/// descriptive error. Input order is preserved.
pub struct MediaNormalizer {
    http: reqwest::Client,
    bundled_dir: PathBuf,
}

impl MediaNormalizer {
    /// `fetch_timeout` bounds both connection establishment and header
    /// read for remote URLs.
    pub fn new(bundled_dir: PathBuf, fetch_timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(fetch_timeout)
            .read_timeout(fetch_timeout)
            .build()?;
        Ok(Self { http, bundled_dir })
    }

    /// Looks up a named audio file in the bundled assets directory.
    /// The MIME type is fixed to the default; bundled content is not
    /// sniffed.
    pub async fn from_bundled(&self, name: &str) -> Result<MediaItem, AnalysisError> {
        if name.trim().is_empty() {
            return Err(AnalysisError::EmptyInput("file name"));
        }

        let path = self.bundled_dir.join(name);
        let data = tokio::fs::read(&path).await.map_err(|e| {
            tracing::warn!(name = %name, error = %e, "Bundled audio file missing");
            AnalysisError::NotFound {
                name: name.to_string(),
            }
        })?;

        Ok(MediaItem::from_bytes(DEFAULT_AUDIO_MIME, data))
    }

    /// Normalizes uploaded files, dropping zero-length entries. The
    /// MIME classifier is deliberately lossy: anything that is not wav
    /// is treated as mp3.
    pub fn from_uploads(&self, files: Vec<UploadedAudio>) -> Result<Vec<MediaItem>, AnalysisError> {
        let items: Vec<MediaItem> = files
            .into_iter()
            .filter(|f| !f.data.is_empty())
            .map(|f| {
                let mime = determine_audio_mime_type(f.content_type.as_deref());
                MediaItem::from_bytes(mime, f.data)
            })
            .collect();

        if items.is_empty() {
            return Err(AnalysisError::EmptyInput("audio files list"));
        }

        Ok(items)
    }

    /// Validates each remote URL by opening a connection and inspecting
    /// the server-reported content type. The body is not downloaded
    /// here; the resulting MediaItem carries a lazy URL reference the
    /// AI client consumes later.
    pub async fn from_urls(&self, urls: &[String]) -> Result<Vec<MediaItem>, AnalysisError> {
        if urls.is_empty() {
            return Err(AnalysisError::EmptyInput("audio url list"));
        }

        let mut items = Vec::with_capacity(urls.len());
        for url in urls {
            tracing::info!(url = %url, "Processing audio from URL");

            let response =
                self.http
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| AnalysisError::FetchFailed {
                        url: url.clone(),
                        source: e,
                    })?;

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok());

            let mime = validate_audio_content_type(content_type, url)?;
            items.push(MediaItem::from_url(mime, url.clone()));
        }

        Ok(items)
    }

    /// Decodes Base64 payloads into in-memory media. The declared MIME
    /// type is kept verbatim; no check that it matches the decoded
    /// content's actual format.
    pub fn from_base64(&self, items: Vec<Base64Audio>) -> Result<Vec<MediaItem>, AnalysisError> {
        if items.is_empty() {
            return Err(AnalysisError::EmptyInput("base64 audio list"));
        }

        items
            .into_iter()
            .map(|item| {
                if item.mime_type.trim().is_empty() || item.data.trim().is_empty() {
                    return Err(AnalysisError::InvalidInput);
                }
                let decoded = BASE64
                    .decode(item.data.as_bytes())
                    .map_err(AnalysisError::DecodeFailed)?;
                Ok(MediaItem::from_bytes(item.mime_type, decoded))
            })
            .collect()
    }
}

/// Maps a client-supplied content-type hint onto one of the two MIME
/// types the backend is fed for uploads. Lossy by design: only wav is
/// recognized, everything else falls back to mp3.
pub fn determine_audio_mime_type(content_type: Option<&str>) -> &'static str {
    match content_type.map(|c| c.to_ascii_lowercase()).as_deref() {
        Some("audio/wav") | Some("audio/x-wav") => "audio/wav",
        _ => DEFAULT_AUDIO_MIME,
    }
}

/// Accepts the server-reported content type for a fetched URL only if
/// it is an audio type, returning it unnormalized.
pub fn validate_audio_content_type(
    content_type: Option<&str>,
    url: &str,
) -> Result<String, AnalysisError> {
    match content_type {
        Some(ct) if ct.starts_with("audio/") => Ok(ct.to_string()),
        _ => Err(AnalysisError::InvalidMimeType {
            url: url.to_string(),
        }),
    }
}
