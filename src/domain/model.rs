use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One gallery record, normalized from the upstream database.
///
/// Every optional upstream field is resolved to its fallback here, once, so
/// rendering never has to reason about missing values: absent text fields
/// become empty strings and an absent or unparseable date becomes `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryPost {
    pub title: String,
    /// Raw image reference as stored upstream. May be a direct media URL or a
    /// Canva page link that needs rewriting before use; empty when the record
    /// carries no image.
    pub image_url: String,
    pub caption: String,
    /// Date text exactly as stored upstream, for display in the tile overlay.
    pub date_label: String,
    /// Parsed date used for ordering.
    pub post_date: Option<NaiveDate>,
}

impl GalleryPost {
    /// Sort key: `NaiveDate::default()` is the Unix epoch, so under a
    /// descending sort undated records trail every dated one.
    pub fn sort_date(&self) -> NaiveDate {
        self.post_date.unwrap_or_default()
    }
}
