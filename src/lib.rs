pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::notion::NotionClient;
pub use config::ServerConfig;
pub use domain::model::GalleryPost;
pub use domain::ports::PostSource;
pub use utils::error::{GalleryError, Result};
