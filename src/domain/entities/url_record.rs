//! UrlRecord entity pairing an original URL with its short identifier.

use super::ShortId;

/// A registered URL and the identifier it was assigned.
///
/// `original_url` is stored exactly as submitted; no normalization is applied,
/// so `http://x.com` and `http://x.com/` are different records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub original_url: String,
    pub short_id: ShortId,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(original_url: impl Into<String>, short_id: ShortId) -> Self {
        Self {
            original_url: original_url.into(),
            short_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_url_verbatim() {
        let record = UrlRecord::new("HTTP://Example.com:80/a b", ShortId::FIRST);
        assert_eq!(record.original_url, "HTTP://Example.com:80/a b");
        assert_eq!(record.short_id.get(), 1);
    }
}
