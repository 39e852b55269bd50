//! Expiring response cache implementation.

use derive_getters::Getters;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Cache entry with raw payload and insertion time.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    value: Vec<u8>,
    created_at: Instant,
}

impl CacheEntry {
    /// Time elapsed since this entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

type EntryMap = HashMap<String, CacheEntry>;

/// Time-expiring cache for raw response bodies, keyed by request URL.
///
/// Entries are stamped at insertion and removed by a background reaper
/// task that sweeps once per `interval`. Reads never expire entries
/// themselves, so an entry can remain visible for up to roughly twice
/// the interval before the next sweep removes it.
///
/// The handle is cheap to clone; all clones share the same entry map
/// and reaper. Every map access takes the single mutex, and the lock
/// is never held across an await point.
///
/// # Example
///
/// ```no_run
/// use pokedex_cache::ResponseCache;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = ResponseCache::new(Duration::from_secs(5));
///
/// cache.set("https://pokeapi.co/api/v2/location-area", b"{}".to_vec());
/// assert!(cache.get("https://pokeapi.co/api/v2/location-area").is_some());
///
/// // Stop the reaper when embedding contexts need clean teardown.
/// cache.shutdown().await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: Arc<Mutex<EntryMap>>,
    interval: Duration,
    shutdown_tx: watch::Sender<bool>,
    reaper: Arc<tokio::sync::Mutex<Option<JoinHandle<()>>>>,
}

impl ResponseCache {
    /// Create a new cache and spawn its background reaper.
    ///
    /// `interval` is both the staleness threshold and the reaper's
    /// polling period. Must be called from within a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        tracing::debug!(interval = ?interval, "Creating new ResponseCache");

        let entries = Arc::new(Mutex::new(EntryMap::new()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let reaper_entries = Arc::clone(&entries);
        let handle = tokio::spawn(Self::reap_loop(reaper_entries, interval, shutdown_rx));

        Self {
            entries,
            interval,
            shutdown_tx,
            reaper: Arc::new(tokio::sync::Mutex::new(Some(handle))),
        }
    }

    /// The staleness threshold and reaper polling period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Insert or overwrite the entry for `key`.
    ///
    /// The insertion timestamp is taken while holding the map lock, so
    /// a concurrent sweep can never observe an entry without one.
    pub fn set(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        let entry = CacheEntry {
            value,
            created_at: Instant::now(),
        };

        let mut entries = self.lock_entries();
        tracing::trace!(
            key = %key,
            bytes = entry.value.len(),
            overwrite = entries.contains_key(&key),
            "Inserted entry into cache"
        );
        entries.insert(key, entry);
    }

    /// Get a clone of the cached payload for `key`.
    ///
    /// Returns `None` if the key was never set or the reaper has
    /// removed it. Age is not checked here: expiration is enforced
    /// only by the reaper.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.lock_entries();
        match entries.get(key) {
            Some(entry) => {
                tracing::trace!(key = %key, age = ?entry.age(), "Cache hit");
                Some(entry.value.clone())
            }
            None => {
                tracing::trace!(key = %key, "Cache miss");
                None
            }
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        let mut entries = self.lock_entries();
        let count = entries.len();
        entries.clear();
        tracing::debug!(cleared = count, "Cleared cache");
    }

    /// Signal the reaper to stop and wait until it has exited.
    ///
    /// Idempotent: later calls (from any clone of the handle) return
    /// once the reaper is already gone. The map itself stays usable,
    /// but nothing expires entries after shutdown.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
        let handle = self.reaper.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
        tracing::debug!("Cache reaper stopped");
    }

    /// Take the map lock, recovering from poisoning.
    ///
    /// A panic in some other holder must not cascade into the reaper
    /// or into callers; the map is structurally valid regardless.
    fn lock_entries(&self) -> std::sync::MutexGuard<'_, EntryMap> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    async fn reap_loop(
        entries: Arc<Mutex<EntryMap>>,
        interval: Duration,
        mut shutdown_rx: watch::Receiver<bool>,
    ) {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; consume it so sweeps
        // start one full interval after construction.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => Self::sweep(&entries, interval),
                changed = shutdown_rx.changed() => {
                    // Err means every cache handle was dropped.
                    if changed.is_err() || *shutdown_rx.borrow() {
                        tracing::debug!("Reaper exiting");
                        break;
                    }
                }
            }
        }
    }

    /// Remove every entry older than `interval`.
    ///
    /// Holds the lock for the whole sweep, so entries inserted
    /// mid-sweep are stamped either before or after it, never during.
    fn sweep(entries: &Mutex<EntryMap>, interval: Duration) {
        let mut entries = entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| entry.age() <= interval);

        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(
                removed,
                remaining = entries.len(),
                "Reaped expired cache entries"
            );
        }
    }
}
