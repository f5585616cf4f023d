mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{AiSettings, MediaSettings, ServerSettings, Settings, DEFAULT_SYSTEM_PROMPT};
