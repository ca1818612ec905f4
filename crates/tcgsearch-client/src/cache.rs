//! Time-bounded single-value cache

use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Holds the last successfully fetched value for `ttl`.
///
/// A zero `ttl` disables caching. Failed fetches never replace the stored
/// value.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: RwLock<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Cached value, if still fresh
    pub async fn get(&self) -> Option<T> {
        if self.ttl.is_zero() {
            return None;
        }
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    pub async fn put(&self, value: T) {
        if self.ttl.is_zero() {
            return;
        }
        *self.slot.write().await = Some((Instant::now(), value));
    }

    /// Return the cached value or run `fetch`, storing its result on success.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get().await {
            return Ok(value);
        }
        let value = fetch().await?;
        self.put(value.clone()).await;
        Ok(value)
    }
}
