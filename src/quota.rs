//! Persistence of the client-side quota gate.
//!
//! The gate is a single scalar: the earliest Unix-epoch-millisecond
//! timestamp at which the next request is allowed. Zero (or an absent
//! store) means no restriction. The stores here make no transactional
//! guarantee; the last writer wins.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;

/// Storage for the "earliest next allowed request" timestamp.
///
/// Injected into the client so embedders can choose where the gate
/// lives; [`FileQuotaStore`] is the default.
pub trait QuotaStore: std::fmt::Debug {
    /// Read the timestamp in epoch milliseconds. Zero means no restriction.
    fn allowed_after(&self) -> Result<u64>;

    /// Write the timestamp in epoch milliseconds.
    fn set_allowed_after(&self, timestamp_millis: u64) -> Result<()>;
}

impl<S: QuotaStore + ?Sized> QuotaStore for std::sync::Arc<S> {
    fn allowed_after(&self) -> Result<u64> {
        (**self).allowed_after()
    }

    fn set_allowed_after(&self, timestamp_millis: u64) -> Result<()> {
        (**self).set_allowed_after(timestamp_millis)
    }
}

/// Quota store backed by a single plain-text file.
#[derive(Debug)]
pub struct FileQuotaStore {
    path: PathBuf,
}

impl FileQuotaStore {
    /// Create a store at the default location under the user cache
    /// directory.
    pub fn new() -> Self {
        Self {
            path: default_quota_path(),
        }
    }

    /// Create a store backed by the given file.
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileQuotaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotaStore for FileQuotaStore {
    fn allowed_after(&self) -> Result<u64> {
        // A missing or unreadable file means no restriction.
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim().parse().unwrap_or(0)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn set_allowed_after(&self, timestamp_millis: u64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, timestamp_millis.to_string())?;
        Ok(())
    }
}

/// In-memory quota store for tests and embedders that do not want the
/// gate to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryQuotaStore {
    allowed_after: AtomicU64,
}

impl MemoryQuotaStore {
    /// Create a store with no restriction.
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuotaStore for MemoryQuotaStore {
    fn allowed_after(&self) -> Result<u64> {
        Ok(self.allowed_after.load(Ordering::Acquire))
    }

    fn set_allowed_after(&self, timestamp_millis: u64) -> Result<()> {
        self.allowed_after.store(timestamp_millis, Ordering::Release);
        Ok(())
    }
}

/// Default location of the quota file.
pub fn default_quota_path() -> PathBuf {
    if let Some(cache_dir) = dirs::cache_dir() {
        cache_dir.join("geocoder-rs").join("allowed-after")
    } else {
        PathBuf::from(".geocoder-rs").join("allowed-after")
    }
}
