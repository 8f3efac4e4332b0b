use crate::domain::model::GalleryPost;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Upstream record source. The HTTP handler only ever sees this port, so the
/// concrete Notion client is constructed once at startup and injected.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Query all records currently held by the given data source (one page;
    /// upstream pagination is out of scope).
    async fn query_posts(&self, database_id: &str) -> Result<Vec<GalleryPost>>;
}
