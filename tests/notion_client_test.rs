use chrono::NaiveDate;
use gallery_feed::{NotionClient, PostSource};
use httpmock::prelude::*;

#[tokio::test]
async fn query_posts_parses_notion_response() {
    let server = MockServer::start();
    let mock_body = serde_json::json!({
        "object": "list",
        "results": [
            {
                "object": "page",
                "properties": {
                    "Post Title": { "type": "title", "title": [{ "plain_text": "Spring Launch" }] },
                    "Image Link": { "type": "url", "url": "https://cdn.test/a.jpg" },
                    "Caption": { "type": "rich_text", "rich_text": [{ "plain_text": "Hello" }] },
                    "Post Date": { "type": "date", "date": { "start": "2024-03-01" } }
                }
            },
            {
                "object": "page",
                "properties": {
                    "Post Title": { "type": "title", "title": [] },
                    "Image Link": { "type": "url", "url": null },
                    "Post Date": { "type": "date", "date": null }
                }
            }
        ],
        "has_more": false
    });

    let query_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/databases/db123/query")
            .header("authorization", "Bearer test-token")
            .header("Notion-Version", "2022-06-28");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_body);
    });

    let client = NotionClient::new(server.base_url(), "test-token");
    let posts = client.query_posts("db123").await.unwrap();

    query_mock.assert();
    assert_eq!(posts.len(), 2);

    assert_eq!(posts[0].title, "Spring Launch");
    assert_eq!(posts[0].image_url, "https://cdn.test/a.jpg");
    assert_eq!(posts[0].caption, "Hello");
    assert_eq!(posts[0].date_label, "2024-03-01");
    assert_eq!(posts[0].post_date, NaiveDate::from_ymd_opt(2024, 3, 1));

    // Missing fields resolve to their declared fallbacks.
    assert_eq!(posts[1].title, "");
    assert_eq!(posts[1].image_url, "");
    assert_eq!(posts[1].caption, "");
    assert_eq!(posts[1].date_label, "");
    assert_eq!(posts[1].post_date, None);
}

#[tokio::test]
async fn query_posts_fails_on_upstream_error_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/databases/db123/query");
        then.status(502).body("bad gateway");
    });

    let client = NotionClient::new(server.base_url(), "test-token");
    let result = client.query_posts("db123").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn query_posts_fails_on_malformed_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/databases/db123/query");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("this is not json");
    });

    let client = NotionClient::new(server.base_url(), "test-token");
    let result = client.query_posts("db123").await;

    assert!(result.is_err());
}
