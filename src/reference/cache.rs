use super::{CountryRecord, ReferenceDataProvider};
use crate::error::CheckResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

struct CacheEntry {
    fetched_at: Instant,
    records: Arc<[CountryRecord]>,
}

/// Keeps the last successful fetch for `ttl`
///
/// Failed fetches are not cached; the next call tries the inner provider again.
pub struct CachedProvider<P> {
    inner: P,
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl<P: ReferenceDataProvider> CachedProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Drop the cached dataset so the next fetch goes to the inner provider
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }

    fn fresh(&self, entry: &Option<CacheEntry>) -> Option<Arc<[CountryRecord]>> {
        entry
            .as_ref()
            .filter(|e| e.fetched_at.elapsed() < self.ttl)
            .map(|e| e.records.clone())
    }
}

#[async_trait]
impl<P: ReferenceDataProvider> ReferenceDataProvider for CachedProvider<P> {
    async fn fetch(&self) -> CheckResult<Arc<[CountryRecord]>> {
        if let Some(records) = self.fresh(&*self.entry.read().await) {
            return Ok(records);
        }

        let mut entry = self.entry.write().await;
        // Another task may have refreshed while we waited for the lock
        if let Some(records) = self.fresh(&entry) {
            return Ok(records);
        }

        let records = self.inner.fetch().await?;
        debug!(count = records.len(), ttl_secs = self.ttl.as_secs(), "Reference data cached");
        *entry = Some(CacheEntry {
            fetched_at: Instant::now(),
            records: records.clone(),
        });

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ReferenceDataProvider for CountingProvider {
        async fn fetch(&self) -> CheckResult<Arc<[CountryRecord]>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CheckError::Fetch("down".to_string()));
            }
            Ok(vec![CountryRecord::new("Chile", &["Spanish"])].into())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_hit_and_expiry() {
        let cached = CachedProvider::new(CountingProvider::default(), Duration::from_secs(60));

        assert_eq!(cached.fetch().await.unwrap().len(), 1);
        assert_eq!(cached.fetch().await.unwrap().len(), 1);
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(61)).await;
        cached.fetch().await.unwrap();
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_hits_share_one_dataset() {
        let cached = CachedProvider::new(CountingProvider::default(), Duration::from_secs(60));
        let first = cached.fetch().await.unwrap();
        let second = cached.fetch().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cached = CachedProvider::new(CountingProvider::default(), Duration::from_secs(60));
        cached.fetch().await.unwrap();
        cached.invalidate().await;
        cached.fetch().await.unwrap();
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let inner = CountingProvider {
            fail: true,
            ..Default::default()
        };
        let cached = CachedProvider::new(inner, Duration::from_secs(60));

        assert!(cached.fetch().await.is_err());
        assert!(cached.fetch().await.is_err());
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }
}
