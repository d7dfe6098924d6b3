//! The FeatureDataStore - coalescing, insert-only matrix cache.
//!
//! Each feature id owns one cache slot for the life of the store. The first
//! request spawns the load and parks a `watch` receiver in the slot; later
//! requests join that receiver until the load publishes its result, after which
//! the slot holds the value itself. Loads run as detached tasks, so a caller
//! that stops waiting does not cancel them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use overlap_core::{artifact_key, FeatureSupportMatrix};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::MatrixSource;

/// Outcome of one load: the matrix, or `None` for not-found.
type Loaded = Option<Arc<FeatureSupportMatrix>>;

/// Cache slot for one feature id.
enum Slot {
    /// A load is in flight; resolves to `Some(loaded)` when done.
    Loading(watch::Receiver<Option<Loaded>>),
    /// The load finished.
    Ready(Loaded),
}

/// How a request attached to its slot.
enum Join {
    Ready(Loaded),
    Joined(watch::Receiver<Option<Loaded>>),
    Started(watch::Receiver<Option<Loaded>>),
    /// No tokio runtime to run the load on; nothing was recorded.
    NoRuntime,
}

/// Publishes a load's outcome, even if the load unwinds.
///
/// A load that never finishes removes its slot so a later request can retry,
/// and current waiters see not-found.
struct Publisher<S> {
    inner: Arc<StoreInner<S>>,
    id: Option<String>,
    tx: watch::Sender<Option<Loaded>>,
}

impl<S> Publisher<S> {
    fn publish(mut self, loaded: Loaded) {
        if let Some(id) = self.id.take() {
            // Publish in the map before notifying so new requests see the value.
            self.inner.slots.lock().insert(id, Slot::Ready(loaded.clone()));
            let _ = self.tx.send(Some(loaded));
        }
    }
}

impl<S> Drop for Publisher<S> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            tracing::warn!(feature = %id, "feature load aborted, releasing slot");
            self.inner.slots.lock().remove(&id);
            let _ = self.tx.send(Some(None));
        }
    }
}

/// Snapshot of store counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Calls to `get`.
    pub requests: u64,
    /// Requests answered from a finished slot.
    pub hits: u64,
    /// Requests that joined an in-flight load.
    pub joins: u64,
    /// Underlying source loads.
    pub loads: u64,
}

struct StoreInner<S> {
    source: S,
    slots: Mutex<HashMap<String, Slot>>,
    requests: AtomicU64,
    hits: AtomicU64,
    joins: AtomicU64,
    loads: AtomicU64,
}

impl<S: MatrixSource> StoreInner<S> {
    /// Run the underlying load and map failures to the store's policy:
    /// malformed data becomes an empty matrix, anything else not-found.
    async fn load(&self, feature_id: &str) -> Loaded {
        self.loads.fetch_add(1, Ordering::Relaxed);
        let key = artifact_key(feature_id);
        tracing::debug!(feature = %feature_id, key = %key, "loading feature data");

        match self.source.load(&key).await {
            Ok(matrix) => Some(Arc::new(matrix)),
            Err(err) if err.is_malformed() => {
                tracing::warn!(
                    feature = %feature_id,
                    error = %err,
                    "malformed feature data, treating as empty"
                );
                Some(Arc::new(FeatureSupportMatrix::new()))
            }
            Err(err) if err.is_not_found() => {
                tracing::warn!(feature = %feature_id, key = %key, "feature data not found");
                None
            }
            Err(err) => {
                tracing::warn!(feature = %feature_id, error = %err, "failed to load feature data");
                None
            }
        }
    }
}

/// On-demand loader of per-feature support matrices.
///
/// Cheap to clone; clones share the cache. At most one underlying load succeeds
/// per feature id for the lifetime of the store, and finished entries are never
/// evicted or replaced. Loads run on the current tokio runtime; outside one,
/// nothing is loaded or cached.
pub struct FeatureDataStore<S> {
    inner: Arc<StoreInner<S>>,
}

impl<S> Clone for FeatureDataStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: MatrixSource> FeatureDataStore<S> {
    /// Create a store with an empty cache.
    pub fn new(source: S) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                source,
                slots: Mutex::new(HashMap::new()),
                requests: AtomicU64::new(0),
                hits: AtomicU64::new(0),
                joins: AtomicU64::new(0),
                loads: AtomicU64::new(0),
            }),
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.inner.source
    }

    /// Get the support matrix for a feature id, or `None` if it has no data.
    ///
    /// Cached values return immediately; concurrent callers for an id that is
    /// still loading share the one in-flight load.
    pub async fn get(&self, feature_id: &str) -> Option<Arc<FeatureSupportMatrix>> {
        self.inner.requests.fetch_add(1, Ordering::Relaxed);

        let mut rx = match self.join(feature_id) {
            Join::Ready(loaded) => {
                self.inner.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(feature = %feature_id, "feature data cache hit");
                return loaded;
            }
            Join::Joined(rx) => {
                self.inner.joins.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(feature = %feature_id, "joining in-flight feature load");
                rx
            }
            Join::Started(rx) => rx,
            Join::NoRuntime => return None,
        };

        // Bound to a local so the watch borrow ends before `rx` is dropped.
        let loaded = match rx.wait_for(Option::is_some).await {
            Ok(published) => published.clone().flatten(),
            Err(_) => {
                tracing::warn!(feature = %feature_id, "feature load ended without a result");
                None
            }
        };
        loaded
    }

    /// Start loads for every id not yet cached or loading, without waiting.
    ///
    /// Returns the number of loads started.
    pub fn preload<I, T>(&self, feature_ids: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        feature_ids
            .into_iter()
            .filter(|id| matches!(self.join(id.as_ref()), Join::Started(_)))
            .count()
    }

    /// Check whether a finished value is cached for an id.
    pub fn is_cached(&self, feature_id: &str) -> bool {
        matches!(
            self.inner.slots.lock().get(feature_id),
            Some(Slot::Ready(_))
        )
    }

    /// Number of ids with a finished value.
    pub fn cached_count(&self) -> usize {
        self.inner
            .slots
            .lock()
            .values()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }

    /// Snapshot of the store counters.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            requests: self.inner.requests.load(Ordering::Relaxed),
            hits: self.inner.hits.load(Ordering::Relaxed),
            joins: self.inner.joins.load(Ordering::Relaxed),
            loads: self.inner.loads.load(Ordering::Relaxed),
        }
    }

    /// Attach to the slot for `feature_id`, starting a load if there is none.
    fn join(&self, feature_id: &str) -> Join {
        let mut slots = self.inner.slots.lock();
        match slots.get(feature_id) {
            Some(Slot::Ready(loaded)) => return Join::Ready(loaded.clone()),
            Some(Slot::Loading(rx)) => return Join::Joined(rx.clone()),
            None => {}
        }

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(feature = %feature_id, "no tokio runtime, feature load not started");
            return Join::NoRuntime;
        };

        let (tx, rx) = watch::channel(None);
        slots.insert(feature_id.to_string(), Slot::Loading(rx.clone()));
        drop(slots);

        let id = feature_id.to_string();
        let publisher = Publisher {
            inner: Arc::clone(&self.inner),
            id: Some(id.clone()),
            tx,
        };
        runtime.spawn(async move {
            let loaded = publisher.inner.load(&id).await;
            publisher.publish(loaded);
        });

        Join::Started(rx)
    }
}
