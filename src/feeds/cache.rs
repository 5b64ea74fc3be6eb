//! Read-through cache for feed content.
//!
//! Decides per feed whether the local copy is still fresh or the content
//! must be refetched, and records where the returned content came from.

use crate::config::Config;
use crate::error::EdlError;
use crate::feeds::store::{cache_key, CacheStore};
use crate::feeds::transport::Transport;
use crate::models::Provenance;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;

/// Freshness policy for one cache entry.
///
/// An entry is fresh when it exists, no refresh was forced, and its age is
/// within `max_age`. `None` means the entry is absent.
pub fn is_fresh(age: Option<Duration>, max_age: Duration, force: bool) -> bool {
    if force {
        return false;
    }
    match age {
        Some(age) => age <= max_age,
        None => false,
    }
}

/// Feed content access with an on-disk cache in front of the network.
pub struct FeedCache {
    store: CacheStore,
    transport: Arc<dyn Transport>,
    max_age: Duration,
    force_refresh: bool,
}

impl FeedCache {
    /// Open the cache under `config.cache_dir`, creating it when absent.
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Result<FeedCache, EdlError> {
        Ok(FeedCache {
            store: CacheStore::open(&config.cache_dir)?,
            transport,
            max_age: config.cache_max_age,
            force_refresh: config.force_refresh,
        })
    }

    /// Fetch a feed's content, serving the cached copy when it is fresh.
    ///
    /// A stale or absent entry triggers one download; the body is persisted
    /// before it is returned. A failed download writes nothing and the
    /// stale copy is NOT served as a fallback, so a feed either yields
    /// current-window content or an error.
    ///
    /// # Returns
    /// * `Ok((content, provenance))` - the feed body plus where it came from
    /// * `Err(EdlError)` - download or cache I/O failure for this feed
    pub async fn get(&self, url: &str) -> Result<(String, Provenance), EdlError> {
        let key = cache_key(url);

        // Forced refresh never consults the entry age.
        let age = if self.force_refresh {
            None
        } else {
            self.store.age(&key)?
        };
        if is_fresh(age, self.max_age, self.force_refresh) {
            if let Ok(Some(mtime)) = self.store.modified(&key) {
                let fetched: DateTime<Local> = mtime.into();
                log::debug!(
                    "using cached copy of {url} (fetched {})",
                    fetched.format("%Y-%m-%d %H:%M:%S")
                );
            }
            let content = self.store.read(&key)?;
            return Ok((content, Provenance::Cached));
        }

        log::debug!("fetching {url}");
        let body = self.transport.fetch_text(url).await?;
        self.store.write(&key, &body)?;
        Ok((body, Provenance::Fresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubTransport {
        body: Result<String, u16>,
        hits: AtomicUsize,
    }

    impl StubTransport {
        fn serving(body: &str) -> Arc<StubTransport> {
            Arc::new(StubTransport {
                body: Ok(body.to_string()),
                hits: AtomicUsize::new(0),
            })
        }

        fn failing(status: u16) -> Arc<StubTransport> {
            Arc::new(StubTransport {
                body: Err(status),
                hits: AtomicUsize::new(0),
            })
        }

        fn hits(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn fetch_text(&self, url: &str) -> Result<String, EdlError> {
            self.hits.fetch_add(1, Ordering::SeqCst);
            match &self.body {
                Ok(body) => Ok(body.clone()),
                Err(status) => Err(EdlError::HttpStatus {
                    url: url.to_string(),
                    status: *status,
                }),
            }
        }
    }

    fn scratch_config(name: &str) -> Config {
        let dir: PathBuf =
            std::env::temp_dir().join(format!("edl-scan-cache-{}-{}", name, std::process::id()));
        fs::remove_dir_all(&dir).ok();
        Config {
            cache_dir: dir,
            ..Config::default()
        }
    }

    #[test]
    fn test_is_fresh_policy() {
        let max_age = Duration::from_secs(100);
        assert!(!is_fresh(None, max_age, false), "absent entry is never fresh");
        assert!(is_fresh(Some(Duration::ZERO), max_age, false));
        assert!(is_fresh(Some(Duration::from_secs(100)), max_age, false), "age equal to max is fresh");
        assert!(!is_fresh(Some(Duration::from_secs(101)), max_age, false));
        assert!(!is_fresh(Some(Duration::ZERO), max_age, true), "force overrides a fresh entry");
    }

    #[tokio::test]
    async fn test_second_get_is_served_from_cache() {
        let config = scratch_config("second-get");
        let transport = StubTransport::serving("10.0.0.0/8\n");
        let cache = FeedCache::new(&config, transport.clone()).expect("open cache");

        let (body, provenance) = cache.get("https://example.com/feeds/a/ipv4").await.expect("first get");
        assert_eq!(body, "10.0.0.0/8\n");
        assert_eq!(provenance, Provenance::Fresh);

        let (body, provenance) = cache.get("https://example.com/feeds/a/ipv4").await.expect("second get");
        assert_eq!(body, "10.0.0.0/8\n");
        assert_eq!(provenance, Provenance::Cached);
        assert_eq!(transport.hits(), 1, "second get must not touch the network");

        fs::remove_dir_all(&config.cache_dir).ok();
    }

    #[tokio::test]
    async fn test_force_refresh_always_downloads() {
        let config = Config {
            force_refresh: true,
            ..scratch_config("force")
        };
        let transport = StubTransport::serving("192.168.0.0/16\n");
        let cache = FeedCache::new(&config, transport.clone()).expect("open cache");

        let (_, provenance) = cache.get("https://example.com/feeds/b/ipv4").await.expect("first get");
        assert_eq!(provenance, Provenance::Fresh);
        let (_, provenance) = cache.get("https://example.com/feeds/b/ipv4").await.expect("second get");
        assert_eq!(provenance, Provenance::Fresh);
        assert_eq!(transport.hits(), 2);

        fs::remove_dir_all(&config.cache_dir).ok();
    }

    #[tokio::test]
    async fn test_force_refresh_skips_the_entry_age_lookup() {
        let config = Config {
            force_refresh: true,
            ..scratch_config("force-no-stat")
        };
        let transport = StubTransport::serving("10.0.0.0/8\n");
        let cache = FeedCache::new(&config, transport.clone()).expect("open cache");

        // Make any metadata lookup under the cache dir fail by replacing
        // the directory with a plain file.
        fs::remove_dir_all(&config.cache_dir).expect("remove cache dir");
        fs::write(&config.cache_dir, "not a directory").expect("plant file");

        let result = cache.get("https://example.com/feeds/e/ipv4").await;
        assert_eq!(
            transport.hits(),
            1,
            "force must reach the network without consulting the entry age"
        );
        assert!(result.is_err(), "persisting under the clobbered dir still fails");

        fs::remove_file(&config.cache_dir).ok();
    }

    #[tokio::test]
    async fn test_failed_download_leaves_existing_entry_untouched() {
        let config = Config {
            force_refresh: true,
            ..scratch_config("failed-download")
        };
        let transport = StubTransport::failing(503);
        let cache = FeedCache::new(&config, transport).expect("open cache");

        let url = "https://example.com/feeds/c/ipv4";
        let store = CacheStore::open(&config.cache_dir).expect("open store");
        store.write(&cache_key(url), "old content\n").expect("seed entry");

        let err = cache.get(url).await.expect_err("download should fail");
        assert!(matches!(err, EdlError::HttpStatus { status: 503, .. }));
        assert_eq!(
            store.read(&cache_key(url)).expect("entry still readable"),
            "old content\n",
            "a failed download must not overwrite the cached copy"
        );

        fs::remove_dir_all(&config.cache_dir).ok();
    }

    #[tokio::test]
    async fn test_miss_persists_the_body() {
        let config = scratch_config("persist");
        let transport = StubTransport::serving("172.16.0.0/12\n");
        let cache = FeedCache::new(&config, transport).expect("open cache");

        let url = "https://example.com/feeds/d/ipv4";
        cache.get(url).await.expect("get");

        let store = CacheStore::open(&config.cache_dir).expect("open store");
        assert!(store.has(&cache_key(url)));
        assert_eq!(store.read(&cache_key(url)).expect("read back"), "172.16.0.0/12\n");

        fs::remove_dir_all(&config.cache_dir).ok();
    }
}
