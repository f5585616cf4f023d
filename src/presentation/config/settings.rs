use std::path::PathBuf;
use std::time::Duration;

use super::Environment;

/// Default system prompt defining the assistant's persona and the
/// exact sentinel phrase it must emit for off-topic prompts. Loaded
/// once at startup and injected into the analysis service.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are an AI assistant that specializes in audio analysis.
Your task is to analyze the provided audio file(s) and answer the user's question.
Common tasks are transcribing speech to text or summarizing the content.
If the user's prompt is not related to analyzing the audio,
respond with the exact phrase: 'Error: I can only analyze audio and answer related questions.'";

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub ai: AiSettings,
    pub media: MediaSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AiSettings {
    pub api_key: String,
    pub model: String,
    /// Override for the Gemini API base URL; `None` uses the public
    /// endpoint.
    pub base_url: Option<String>,
    pub system_prompt: String,
}

#[derive(Debug, Clone)]
pub struct MediaSettings {
    /// Directory holding the audio files the from-classpath endpoint
    /// can reference by name.
    pub bundled_dir: PathBuf,
    /// Connect and read timeout applied to remote URL fetches.
    pub fetch_timeout: Duration,
}

impl Settings {
    /// Loads settings from environment variables, falling back to local
    /// development defaults.
    pub fn from_env() -> Result<Self, String> {
        let environment = std::env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .try_into()?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(p) => p
                .parse()
                .map_err(|_| format!("Invalid SERVER_PORT: {}", p))?,
            Err(_) => 8080,
        };

        let fetch_timeout_ms = match std::env::var("AUDIO_FETCH_TIMEOUT_MS") {
            Ok(v) => v
                .parse()
                .map_err(|_| format!("Invalid AUDIO_FETCH_TIMEOUT_MS: {}", v))?,
            Err(_) => 5_000,
        };

        Ok(Self {
            environment,
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            ai: AiSettings {
                api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
                model: std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
                base_url: std::env::var("GEMINI_BASE_URL").ok(),
                system_prompt: std::env::var("SYSTEM_PROMPT")
                    .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string()),
            },
            media: MediaSettings {
                bundled_dir: std::env::var("AUDIO_ASSETS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("assets/audio")),
                fetch_timeout: Duration::from_millis(fetch_timeout_ms),
            },
        })
    }
}
