//! Process-wide boundary data cache with a single-flight guard.
//!
//! Boundary files are large and immutable for the lifetime of a process,
//! so each key is fetched at most once: the first caller runs the fetch
//! while late callers await the same in-flight initialization instead of
//! triggering a second download. Failures are not cached, so a later call
//! may retry a key whose first fetch failed. Entries never expire;
//! [`BoundaryCache::clear`] exists for tests and manual refresh.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use geojson::FeatureCollection;
use tokio::sync::OnceCell;

use crate::BoundaryError;

type CacheCell = Arc<OnceCell<Arc<FeatureCollection>>>;

/// Keyed cache of immutable feature collections.
///
/// Constructed once and shared by reference across all consumers; there is
/// deliberately no global instance (injection keeps tests hermetic).
#[derive(Debug, Default)]
pub struct BoundaryCache {
    entries: Mutex<HashMap<String, CacheCell>>,
}

impl BoundaryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached collection for `key`, fetching it on first use.
    ///
    /// Concurrent callers for the same key share one fetch; the map lock
    /// is only held while locating the per-key cell, never across the
    /// fetch itself.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error to every caller awaiting this attempt.
    /// The failure is not stored; a subsequent call retries.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        fetch: F,
    ) -> Result<Arc<FeatureCollection>, BoundaryError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<FeatureCollection, BoundaryError>>,
    {
        let cell = {
            let mut entries = self.entries.lock().expect("boundary cache lock poisoned");
            Arc::clone(entries.entry(key.to_string()).or_default())
        };

        cell.get_or_try_init(|| async move { fetch().await.map(Arc::new) })
            .await
            .cloned()
    }

    /// Returns `true` when `key` holds a populated entry.
    #[must_use]
    pub fn is_cached(&self, key: &str) -> bool {
        self.entries
            .lock()
            .expect("boundary cache lock poisoned")
            .get(key)
            .is_some_and(|cell| cell.initialized())
    }

    /// Drops every entry, populated or in flight.
    pub fn clear(&self) {
        self.entries
            .lock()
            .expect("boundary cache lock poisoned")
            .clear();
    }
}
