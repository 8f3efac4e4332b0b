use crate::utils::error::{GalleryError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GalleryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_listen_addr(field_name: &str, addr: &str) -> Result<()> {
    addr.parse::<std::net::SocketAddr>()
        .map(|_| ())
        .map_err(|e| GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(validate_url("api", "https://api.notion.com").is_ok());
        assert!(validate_url("api", "http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn rejects_empty_and_non_http_urls() {
        assert!(validate_url("api", "").is_err());
        assert!(validate_url("api", "ftp://example.com").is_err());
        assert!(validate_url("api", "not a url").is_err());
    }

    #[test]
    fn rejects_malformed_listen_addr() {
        assert!(validate_listen_addr("listen", "127.0.0.1:3000").is_ok());
        assert!(validate_listen_addr("listen", "localhost").is_err());
    }
}
