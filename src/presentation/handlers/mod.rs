mod from_base64;
mod from_classpath;
mod from_files;
mod from_urls;
mod health;
pub mod types;

pub use from_base64::from_base64_handler;
pub use from_classpath::from_classpath_handler;
pub use from_files::from_files_handler;
pub use from_urls::from_urls_handler;
pub use health::health_handler;
