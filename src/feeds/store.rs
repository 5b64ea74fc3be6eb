//! On-disk store for feed bodies, one file per feed URL.

use crate::error::EdlError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Derive the store key (file name) for a feed URL.
///
/// The scheme is stripped and path separators become underscores, so the
/// key is filesystem-safe and a cached file can be traced back to its URL
/// by eye.
pub fn cache_key(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    stripped.replace('/', "_")
}

/// Key-value file store backing the feed cache.
#[derive(Debug)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Open the store, creating its directory when absent.
    pub fn open(dir: &Path) -> Result<CacheStore, EdlError> {
        fs::create_dir_all(dir).map_err(|source| EdlError::CacheIo {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(CacheStore {
            dir: dir.to_path_buf(),
        })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Whether an entry exists for this key.
    pub fn has(&self, key: &str) -> bool {
        self.entry_path(key).exists()
    }

    /// Last write time of an entry, `None` when absent.
    pub fn modified(&self, key: &str) -> Result<Option<SystemTime>, EdlError> {
        let path = self.entry_path(key);
        match fs::metadata(&path) {
            Ok(meta) => {
                let mtime = meta.modified().map_err(|source| EdlError::CacheIo {
                    path: path.clone(),
                    source,
                })?;
                Ok(Some(mtime))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(EdlError::CacheIo { path, source }),
        }
    }

    /// Age of an entry since its last write, `None` when absent.
    ///
    /// An entry whose modification time lies in the future counts as zero
    /// seconds old.
    pub fn age(&self, key: &str) -> Result<Option<Duration>, EdlError> {
        Ok(self
            .modified(key)?
            .map(|mtime| mtime.elapsed().unwrap_or(Duration::ZERO)))
    }

    /// Read the full content of an entry.
    pub fn read(&self, key: &str) -> Result<String, EdlError> {
        let path = self.entry_path(key);
        fs::read_to_string(&path).map_err(|source| EdlError::CacheIo { path, source })
    }

    /// Write (or overwrite) an entry.
    pub fn write(&self, key: &str, content: &str) -> Result<(), EdlError> {
        let path = self.entry_path(key);
        fs::write(&path, content).map_err(|source| EdlError::CacheIo { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("edl-scan-store-{}-{}", name, std::process::id()));
        fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn test_cache_key_strips_scheme_and_flattens_path() {
        assert_eq!(
            cache_key("https://saas.paloaltonetworks.com/feeds/abc/ipv4"),
            "saas.paloaltonetworks.com_feeds_abc_ipv4"
        );
        assert_eq!(
            cache_key("http://example.com/feeds/x"),
            "example.com_feeds_x"
        );
        assert_eq!(cache_key("example.com/feeds/x"), "example.com_feeds_x");
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = scratch_dir("open");
        assert!(!dir.exists());
        CacheStore::open(&dir).expect("open should create the directory");
        assert!(dir.is_dir());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = scratch_dir("rw");
        let store = CacheStore::open(&dir).expect("open store");
        assert!(!store.has("entry"));

        store.write("entry", "10.0.0.0/8\n").expect("write entry");
        assert!(store.has("entry"));
        assert_eq!(store.read("entry").expect("read entry"), "10.0.0.0/8\n");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_entry_has_no_age() {
        let dir = scratch_dir("age-missing");
        let store = CacheStore::open(&dir).expect("open store");
        assert_eq!(store.age("nope").expect("age should not error"), None);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_fresh_write_has_small_age() {
        let dir = scratch_dir("age-fresh");
        let store = CacheStore::open(&dir).expect("open store");
        store.write("entry", "content").expect("write entry");

        let age = store
            .age("entry")
            .expect("age should not error")
            .expect("entry should have an age");
        assert!(age < Duration::from_secs(60), "age {age:?} should be recent");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_missing_entry_is_cache_io_error() {
        let dir = scratch_dir("read-missing");
        let store = CacheStore::open(&dir).expect("open store");
        let err = store.read("nope").expect_err("read of missing entry should fail");
        assert!(matches!(err, EdlError::CacheIo { .. }));
        fs::remove_dir_all(&dir).ok();
    }
}
