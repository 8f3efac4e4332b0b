pub mod gallery;

pub use crate::domain::model::GalleryPost;
pub use crate::domain::ports::PostSource;
pub use crate::utils::error::Result;
