use crate::domain::model::GalleryPost;
use crate::domain::ports::PostSource;
use crate::utils::error::{GalleryError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

const NOTION_VERSION: &str = "2022-06-28";

/// Client for the Notion database query API.
///
/// Holds the process-wide integration token; one instance is built at startup
/// and shared across requests behind `Arc<dyn PostSource>`.
pub struct NotionClient {
    client: Client,
    base_url: String,
    token: String,
}

impl NotionClient {
    /// `base_url` is normally `https://api.notion.com`; tests point it at a
    /// mock server.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl PostSource for NotionClient {
    async fn query_posts(&self, database_id: &str) -> Result<Vec<GalleryPost>> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, database_id);
        tracing::debug!("Querying Notion database: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Notion response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GalleryError::UpstreamStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body: QueryResponse = response.json().await?;
        Ok(body.results.into_iter().map(Page::into_post).collect())
    }
}

// Wire types for the subset of the query response we consume. Unknown fields
// (ids, annotations, pagination cursors) are ignored by serde.

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    properties: PageProperties,
}

#[derive(Debug, Default, Deserialize)]
struct PageProperties {
    #[serde(rename = "Post Title", default)]
    post_title: Option<TitleProperty>,
    #[serde(rename = "Image Link", default)]
    image_link: Option<UrlProperty>,
    #[serde(rename = "Caption", default)]
    caption: Option<RichTextProperty>,
    #[serde(rename = "Post Date", default)]
    post_date: Option<DateProperty>,
}

#[derive(Debug, Deserialize)]
struct TitleProperty {
    #[serde(default)]
    title: Vec<RichTextItem>,
}

#[derive(Debug, Deserialize)]
struct RichTextProperty {
    #[serde(default)]
    rich_text: Vec<RichTextItem>,
}

#[derive(Debug, Deserialize)]
struct RichTextItem {
    #[serde(default)]
    plain_text: String,
}

#[derive(Debug, Deserialize)]
struct UrlProperty {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DateProperty {
    date: Option<DateValue>,
}

#[derive(Debug, Deserialize)]
struct DateValue {
    start: Option<String>,
}

impl Page {
    /// Resolve every optional property to its fallback, producing the
    /// normalized domain record.
    fn into_post(self) -> GalleryPost {
        let props = self.properties;

        let title = props
            .post_title
            .and_then(|p| p.title.into_iter().next())
            .map(|t| t.plain_text)
            .unwrap_or_default();

        let image_url = props
            .image_link
            .and_then(|p| p.url)
            .unwrap_or_default();

        let caption = props
            .caption
            .and_then(|p| p.rich_text.into_iter().next())
            .map(|t| t.plain_text)
            .unwrap_or_default();

        let date_label = props
            .post_date
            .and_then(|p| p.date)
            .and_then(|d| d.start)
            .unwrap_or_default();

        let post_date = parse_post_date(&date_label);

        GalleryPost {
            title,
            image_url,
            caption,
            date_label,
            post_date,
        }
    }
}

/// Notion date starts come as `YYYY-MM-DD` or full RFC 3339 timestamps; the
/// calendar-date prefix is enough for ordering. Unparseable input is `None`.
fn parse_post_date(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
