//! Rendered-page cache keyed by request path.
//!
//! An entry is served while it is fresh: for time-based policies, younger
//! than its interval. A revalidation drops the entry and bumps the path's
//! generation, so a render that started before it cannot store its output.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::modules::revalidation::application::ports::outgoing::PathRevalidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Cached until a revalidation drops the path.
    UntilRevalidated,
    /// Also expires once the entry is older than the interval.
    Revalidate(Duration),
}

#[derive(Debug)]
struct CachedPage {
    html: String,
    stored_at: Instant,
    policy: CachePolicy,
}

impl CachedPage {
    fn is_fresh(&self, now: Instant) -> bool {
        match self.policy {
            CachePolicy::UntilRevalidated => true,
            CachePolicy::Revalidate(interval) => now.duration_since(self.stored_at) < interval,
        }
    }
}

#[derive(Debug, Default)]
struct Entries {
    pages: HashMap<String, CachedPage>,
    /// Revalidation count per path; absent means zero.
    generations: HashMap<String, u64>,
}

#[derive(Debug, Default)]
pub struct PageCache {
    entries: RwLock<Entries>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, path: &str) -> Option<String> {
        let entries = self.entries.read().await;
        let page = entries.pages.get(path)?;
        if page.is_fresh(Instant::now()) {
            debug!(path, "page cache hit");
            Some(page.html.clone())
        } else {
            None
        }
    }

    /// Read before rendering and pass to [`PageCache::store_if_unchanged`].
    pub async fn generation(&self, path: &str) -> u64 {
        let entries = self.entries.read().await;
        entries.generations.get(path).copied().unwrap_or(0)
    }

    /// Stores `html` unless `path` was revalidated since `generation` was
    /// read. Returns whether the page was stored.
    pub async fn store_if_unchanged(
        &self,
        path: &str,
        generation: u64,
        html: String,
        policy: CachePolicy,
    ) -> bool {
        let mut entries = self.entries.write().await;
        let current = entries.generations.get(path).copied().unwrap_or(0);
        if current != generation {
            debug!(path, generation, current, "render outdated by revalidation, not cached");
            return false;
        }
        let page = CachedPage {
            html,
            stored_at: Instant::now(),
            policy,
        };
        entries.pages.insert(path.to_string(), page);
        true
    }

    /// Drops the entry for `path`. Returns false when nothing was cached.
    pub async fn mark_stale(&self, path: &str) -> bool {
        let mut entries = self.entries.write().await;
        *entries.generations.entry(path.to_string()).or_insert(0) += 1;
        entries.pages.remove(path).is_some()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.pages.len()
    }
}

#[async_trait]
impl PathRevalidator for PageCache {
    async fn revalidate_path(&self, path: &str) {
        let had_entry = self.mark_stale(path).await;
        debug!(path, had_entry, "path revalidated");
    }
}
