//! Process-local implementation of the URL registry.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::entities::{ShortId, UrlRecord};
use crate::domain::repositories::UrlRegistry;
use crate::error::AppError;

/// Both lookup directions plus the allocation counter.
///
/// Kept in one struct behind one lock so an insert updates all three together.
#[derive(Debug)]
struct RegistryState {
    by_id: HashMap<ShortId, String>,
    by_url: HashMap<String, ShortId>,
    /// `None` once `u64::MAX` has been issued.
    next_id: Option<ShortId>,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            by_url: HashMap::new(),
            next_id: Some(ShortId::FIRST),
        }
    }
}

impl RegistryState {
    fn record_for_url(&self, original_url: &str) -> Option<UrlRecord> {
        self.by_url
            .get(original_url)
            .map(|&short_id| UrlRecord::new(original_url, short_id))
    }
}

/// In-memory registry shared by all request handlers.
///
/// All mutation happens under the write half of a [`RwLock`]. `create_or_get`
/// re-checks `by_url` after the write guard is acquired, so two callers
/// racing on the same new URL allocate exactly one identifier. Readers take
/// the read half and can never see one map updated without the other.
///
/// Nothing is persisted; the contents are dropped with the process.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryRegistry {
    /// Creates an empty registry whose first identifier will be 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRegistry for InMemoryRegistry {
    async fn create_or_get(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        if let Some(existing) = self.state.read().await.record_for_url(original_url) {
            debug!(short_id = %existing.short_id, "Registry hit for {}", original_url);
            return Ok(existing);
        }

        let mut state = self.state.write().await;

        // Another writer may have registered the URL while we waited for the guard.
        if let Some(existing) = state.record_for_url(original_url) {
            debug!(short_id = %existing.short_id, "Registry hit after lock for {}", original_url);
            return Ok(existing);
        }

        let short_id = state
            .next_id
            .ok_or_else(|| AppError::internal("short id space exhausted"))?;

        state.next_id = short_id.next();
        state.by_id.insert(short_id, original_url.to_string());
        state.by_url.insert(original_url.to_string(), short_id);

        info!(short_id = %short_id, original_url = %original_url, "Registered short URL");

        Ok(UrlRecord::new(original_url, short_id))
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.state.read().await.record_for_url(original_url))
    }

    async fn find_by_id(&self, short_id: ShortId) -> Result<Option<UrlRecord>, AppError> {
        let state = self.state.read().await;

        Ok(state
            .by_id
            .get(&short_id)
            .map(|url| UrlRecord::new(url.clone(), short_id)))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.state.read().await.by_id.len())
    }
}
