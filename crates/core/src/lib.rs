pub mod config;

pub use config::{Config, ConfigError};

/// Maximum accepted upload size: 16 MiB.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Extensions the service accepts for uploaded documents.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "txt", "docx"];

/// Delimiter the generation service uses between question blocks.
pub const BLOCK_MARKER: &str = "## MCQ";
