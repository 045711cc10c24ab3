//! Short URL creation and resolution service.

use std::sync::Arc;
use tracing::debug;

use crate::application::services::url_validator::UrlValidator;
use crate::domain::entities::{ShortId, UrlRecord};
use crate::domain::repositories::UrlRegistry;
use crate::error::AppError;

/// Service for creating and resolving short URLs.
///
/// Combines the [`UrlValidator`] with a [`UrlRegistry`]. Handlers only talk to
/// this type.
pub struct ShortUrlService {
    registry: Arc<dyn UrlRegistry>,
    validator: UrlValidator,
}

impl ShortUrlService {
    /// Creates a new short URL service.
    pub fn new(registry: Arc<dyn UrlRegistry>, validator: UrlValidator) -> Self {
        Self {
            registry,
            validator,
        }
    }

    /// Returns the record for `input`, registering it first if needed.
    ///
    /// # Deduplication
    ///
    /// A URL already in the registry is returned as-is without validating it
    /// again, so a host that stopped resolving keeps its identifier. New URLs
    /// are validated (including the DNS lookup) before registration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL fails validation.
    /// Returns [`AppError::Internal`] if the registry cannot allocate an identifier.
    pub async fn shorten(&self, input: &str) -> Result<UrlRecord, AppError> {
        if let Some(existing) = self.registry.find_by_url(input).await? {
            debug!(short_id = %existing.short_id, "Returning existing short URL");
            return Ok(existing);
        }

        let valid = self.validator.validate(input).await?;

        self.registry.create_or_get(&valid.url).await
    }

    /// Looks up the record for a short identifier given as path text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `raw_id` is not a positive decimal
    /// integer or was never issued.
    pub async fn resolve(&self, raw_id: &str) -> Result<UrlRecord, AppError> {
        let short_id: ShortId = raw_id.parse()?;

        self.registry
            .find_by_id(short_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Returns how many URLs are registered.
    pub async fn registered_count(&self) -> Result<usize, AppError> {
        self.registry.count().await
    }
}
