//! Matrix sources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use overlap_core::{artifact_key, DataError, DataResult, DatasetConfig, FeatureSupportMatrix};
use parking_lot::Mutex;

/// Async access to per-feature artifacts.
///
/// `key` is the sanitized artifact key (see `overlap_core::artifact_key`),
/// never the raw feature id.
#[async_trait]
pub trait MatrixSource: Send + Sync + 'static {
    /// Load and decode the artifact stored under `key`.
    async fn load(&self, key: &str) -> DataResult<FeatureSupportMatrix>;
}

#[async_trait]
impl<T: MatrixSource> MatrixSource for Arc<T> {
    async fn load(&self, key: &str) -> DataResult<FeatureSupportMatrix> {
        (**self).load(key).await
    }
}

/// Reads `<dir>/<key>.json` artifacts.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Source over the per-feature directory named by `config`.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(config.features_path())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn artifact_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl MatrixSource for DirectorySource {
    async fn load(&self, key: &str) -> DataResult<FeatureSupportMatrix> {
        let path = self.artifact_path(key);
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DataError::not_found(key));
            }
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Err(DataError::malformed(key, e.to_string()));
            }
            Err(e) => return Err(DataError::io(key, e)),
        };
        FeatureSupportMatrix::from_artifact_json(key, &json)
    }
}

/// An in-memory artifact.
#[derive(Debug, Clone)]
enum MemoryEntry {
    Matrix(FeatureSupportMatrix),
    Malformed(String),
}

/// In-memory source with load accounting and optional latency.
///
/// Entries are registered by feature id and stored under its artifact key.
#[derive(Debug, Default)]
pub struct MemorySource {
    entries: HashMap<String, MemoryEntry>,
    latency: Option<Duration>,
    loads: AtomicUsize,
    loads_by_key: Mutex<HashMap<String, usize>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a matrix for a feature id.
    pub fn with_matrix(mut self, feature_id: &str, matrix: FeatureSupportMatrix) -> Self {
        self.entries.insert(
            artifact_key(feature_id).into_owned(),
            MemoryEntry::Matrix(matrix),
        );
        self
    }

    /// Register an artifact that fails to decode.
    pub fn with_malformed(mut self, feature_id: &str, message: impl Into<String>) -> Self {
        self.entries.insert(
            artifact_key(feature_id).into_owned(),
            MemoryEntry::Malformed(message.into()),
        );
        self
    }

    /// Delay every load by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Total number of loads served (including failed ones).
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of loads for one feature id.
    pub fn load_count_for(&self, feature_id: &str) -> usize {
        self.loads_by_key
            .lock()
            .get(&*artifact_key(feature_id))
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl MatrixSource for MemorySource {
    async fn load(&self, key: &str) -> DataResult<FeatureSupportMatrix> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        *self.loads_by_key.lock().entry(key.to_string()).or_insert(0) += 1;

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match self.entries.get(key) {
            Some(MemoryEntry::Matrix(matrix)) => Ok(matrix.clone()),
            Some(MemoryEntry::Malformed(message)) => Err(DataError::malformed(key, message.clone())),
            None => Err(DataError::not_found(key)),
        }
    }
}
