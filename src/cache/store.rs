// src/cache/store.rs
// =============================================================================
// On-disk page cache.
//
// Layout:
//   <cache_dir>/<sha256(url) as hex>   one file per page, holding the raw body
//
// Rules:
// - The key depends only on the URL string, so it is the same on every run
//   and every machine
// - An entry is written once, after a successful download, and never touched
//   again (no expiry, no refresh)
// - Failed downloads are never written
// - When caching is disabled every call goes straight to the fetcher
// =============================================================================

use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::error::CrawlError;
use crate::fetch::Fetcher;

#[derive(Debug, Error)]
#[error("cache I/O error on {}: {source}", .path.display())]
pub struct CacheError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl CacheError {
    fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheStore {
    // None = caching disabled for this run
    dir: Option<PathBuf>,
}

impl CacheStore {
    /// Opens (and creates if needed) a cache rooted at `dir`
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, CacheError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| CacheError::new(&dir, e))?;

        Ok(Self { dir: Some(dir) })
    }

    /// A store that never reads or writes anything
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    /// File-system-safe key for an address: lowercase hex SHA-256 of its UTF-8 bytes
    pub fn key_for(address: &str) -> String {
        hex::encode(Sha256::digest(address.as_bytes()))
    }

    fn entry_path(&self, address: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(Self::key_for(address)))
    }

    /// Returns the stored page for `address`, if there is one
    pub async fn get(&self, address: &str) -> Result<Option<String>, CacheError> {
        let Some(path) = self.entry_path(address) else {
            return Ok(None);
        };

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::new(path, e)),
        }
    }

    /// Stores `content` for `address` unless an entry already exists
    pub async fn put(&self, address: &str, content: &str) -> Result<(), CacheError> {
        let Some(path) = self.entry_path(address) else {
            return Ok(());
        };

        if fs::try_exists(&path)
            .await
            .map_err(|e| CacheError::new(&path, e))?
        {
            return Ok(());
        }

        // Write next to the final name, then rename: a reader never sees half a page
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| CacheError::new(&tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| CacheError::new(&path, e))?;

        Ok(())
    }

    /// Returns the cached page for `address`, downloading and storing it on a miss
    pub async fn get_or_fetch<F>(
        &self,
        address: &str,
        fetcher: &F,
    ) -> Result<String, CrawlError>
    where
        F: Fetcher + ?Sized,
    {
        if !self.is_enabled() {
            return Ok(fetcher.fetch(address).await?);
        }

        if let Some(content) = self.get(address).await? {
            log::debug!("Cache hit - {}", address);
            return Ok(content);
        }

        log::debug!("Cache miss - {}", address);
        let content = fetcher.fetch(address).await?;
        self.put(address, &content).await?;
        Ok(content)
    }
}
