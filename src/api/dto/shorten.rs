//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ShortId, UrlRecord};

/// Form body of `POST /api/shorturl`.
///
/// Sent as `application/x-www-form-urlencoded` by the landing page form.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    /// The URL to shorten. Missing and empty values are both rejected.
    #[validate(required, length(min = 1))]
    pub url: Option<String>,
}

/// Successful response of `POST /api/shorturl`.
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: ShortId,
}

impl From<UrlRecord> for ShortenResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape() {
        let response = ShortenResponse::from(UrlRecord::new(
            "http://example.com",
            ShortId::FIRST,
        ));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "original_url": "http://example.com", "short_url": 1 })
        );
    }

    #[test]
    fn test_form_requires_non_empty_url() {
        let missing = ShortenForm { url: None };
        let empty = ShortenForm {
            url: Some(String::new()),
        };
        let present = ShortenForm {
            url: Some("http://example.com".to_string()),
        };

        assert!(missing.validate().is_err());
        assert!(empty.validate().is_err());
        assert!(present.validate().is_ok());
    }
}
