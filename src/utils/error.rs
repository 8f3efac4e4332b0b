use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Upstream request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatusError { status: u16, body: String },

    #[error("Template rendering failed: {0}")]
    RenderError(#[from] askama::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
