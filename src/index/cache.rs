//! Memoized index with explicit invalidation.
//!
//! [`IndexCache`] owns its config and source and builds the index on first
//! access. Later accesses hand out the same `Arc<SiteIndex>` without
//! recomputation until [`IndexCache::invalidate`] is called.
//!
//! Concurrent callers on an empty cache share one in-flight build: exactly
//! one thread runs the pipeline and every waiter receives the same result,
//! success or failure. A failed build is never published, the next access
//! after it retries.
//!
//! The process-wide cache lives behind [`install`], [`get_index`] and
//! [`invalidate`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, OnceLock};

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;

use super::{IndexError, SiteIndex, build_site_index};
use crate::config::IndexConfig;
use crate::debug;
use crate::source::CollectionSource;

/// Result of a (possibly shared) build.
pub type IndexResult = Result<Arc<SiteIndex>, Arc<IndexError>>;

/// A build that waiting callers attach to.
#[derive(Default)]
struct InFlight {
    result: OnceLock<IndexResult>,
}

/// Cache of the last successfully built index.
pub struct IndexCache {
    config: Arc<IndexConfig>,
    source: Arc<dyn CollectionSource>,
    ready: ArcSwapOption<SiteIndex>,
    in_flight: Mutex<Option<Arc<InFlight>>>,
    /// Bumped by `invalidate`; a build started under an older generation
    /// does not publish its result.
    generation: AtomicU64,
    builds: AtomicU64,
}

impl IndexCache {
    pub fn new(config: IndexConfig, source: impl CollectionSource + 'static) -> Self {
        Self::with_shared(Arc::new(config), Arc::new(source))
    }

    pub fn with_shared(config: Arc<IndexConfig>, source: Arc<dyn CollectionSource>) -> Self {
        Self {
            config,
            source,
            ready: ArcSwapOption::from(None),
            in_flight: Mutex::new(None),
            generation: AtomicU64::new(0),
            builds: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Get the index, building it if the cache is empty.
    pub fn get_index(&self) -> IndexResult {
        if let Some(index) = self.ready.load_full() {
            return Ok(index);
        }

        let (flight, generation) = {
            let mut slot = self.in_flight.lock();
            // A build may have finished while we waited for the lock.
            if let Some(index) = self.ready.load_full() {
                return Ok(index);
            }
            let flight = Arc::clone(slot.get_or_insert_with(Default::default));
            (flight, self.generation.load(Ordering::SeqCst))
        };

        let result = flight
            .result
            .get_or_init(|| self.run_build(generation))
            .clone();

        let mut slot = self.in_flight.lock();
        if slot.as_ref().is_some_and(|f| Arc::ptr_eq(f, &flight)) {
            *slot = None;
        }

        result
    }

    /// Drop the cached index; the next access rebuilds from scratch.
    pub fn invalidate(&self) {
        let mut slot = self.in_flight.lock();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.ready.store(None);
        *slot = None;
        debug!("index"; "cache invalidated");
    }

    /// Check if an index is currently cached.
    pub fn is_cached(&self) -> bool {
        self.ready.load().is_some()
    }

    /// Number of pipeline runs so far.
    pub fn build_count(&self) -> u64 {
        self.builds.load(Ordering::SeqCst)
    }

    fn run_build(&self, generation: u64) -> IndexResult {
        self.builds.fetch_add(1, Ordering::SeqCst);
        let result = build_site_index(&self.config, self.source.as_ref())
            .map(Arc::new)
            .map_err(Arc::new);

        if let Ok(index) = &result {
            let _slot = self.in_flight.lock();
            if self.generation.load(Ordering::SeqCst) == generation {
                self.ready.store(Some(Arc::clone(index)));
            }
        }
        result
    }
}

// ============================================================================
// Process-wide cache
// ============================================================================

static GLOBAL_INDEX: LazyLock<ArcSwapOption<IndexCache>> =
    LazyLock::new(|| ArcSwapOption::from(None));

/// Install the process-wide cache, replacing any previous one.
pub fn install(cache: IndexCache) -> Arc<IndexCache> {
    let cache = Arc::new(cache);
    GLOBAL_INDEX.store(Some(Arc::clone(&cache)));
    cache
}

/// Get the process-wide index.
pub fn get_index() -> IndexResult {
    match GLOBAL_INDEX.load_full() {
        Some(cache) => cache.get_index(),
        None => Err(Arc::new(IndexError::NotInstalled)),
    }
}

/// Invalidate the process-wide index (no-op when nothing is installed).
pub fn invalidate() {
    if let Some(cache) = GLOBAL_INDEX.load_full() {
        cache.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use super::*;
    use crate::config::{CollectionsConfig, I18nConfig};
    use crate::core::ContentEntry;
    use crate::source::MemorySource;

    fn config() -> IndexConfig {
        IndexConfig::new(
            I18nConfig::new("en", ["en", "fr"]),
            CollectionsConfig::new(["pages", "tags"], ["pages"]),
        )
    }

    fn source() -> MemorySource {
        MemorySource::new()
            .with_collection(
                "pages",
                [
                    ContentEntry::new("en/home", ""),
                    ContentEntry::new("fr/projects", "").with_permaslug("projets"),
                ],
            )
            .with_collection("tags", [ContentEntry::new("en/rust", "")])
    }

    #[test]
    fn test_reuses_index_until_invalidated() {
        let cache = IndexCache::new(config(), source());
        assert!(!cache.is_cached());

        let first = cache.get_index().unwrap();
        let second = cache.get_index().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.build_count(), 1);

        cache.invalidate();
        assert!(!cache.is_cached());
        let third = cache.get_index().unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(*first, *third);
        assert_eq!(cache.build_count(), 2);
    }

    #[test]
    fn test_concurrent_callers_share_one_build() {
        let cache = Arc::new(IndexCache::new(config(), source()));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache.get_index().unwrap()
                })
            })
            .collect();

        let indexes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(cache.build_count(), 1);
        assert!(indexes.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_failed_build_is_not_cached() {
        let source = MemorySource::new()
            .with_collection("pages", [ContentEntry::new("xx/guides/foo", "")]);
        let cache = IndexCache::new(config(), source);

        let err = cache.get_index().unwrap_err();
        assert_eq!(err.to_string(), "xx is not a supported locale.");
        assert!(!cache.is_cached());

        // Same input, same failure.
        let again = cache.get_index().unwrap_err();
        assert_eq!(again.to_string(), err.to_string());
        assert_eq!(cache.build_count(), 2);
    }

    #[test]
    fn test_concurrent_callers_share_one_failure() {
        let failing = |_: &str| -> anyhow::Result<Vec<ContentEntry>> {
            thread::sleep(Duration::from_millis(100));
            Err(anyhow::anyhow!("content store offline"))
        };
        let cache = Arc::new(IndexCache::new(config(), failing));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache.get_index().unwrap_err()
                })
            })
            .collect();

        let errors: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(cache.build_count(), 1);
        assert!(errors.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert!(matches!(*errors[0], IndexError::Source { .. }));
        assert!(!cache.is_cached());
    }

    #[test]
    fn test_invalidate_during_build_discards_result() {
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let started_tx = Mutex::new(started_tx);
        let release_rx = Mutex::new(release_rx);
        let pages = source();

        let gated = move |name: &str| -> anyhow::Result<Vec<ContentEntry>> {
            if name == "pages" {
                started_tx.lock().send(())?;
                release_rx.lock().recv()?;
            }
            pages.fetch_entries(name)
        };
        let cache = Arc::new(IndexCache::new(config(), gated));

        let stale = {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get_index().unwrap())
        };
        started_rx.recv().unwrap();
        cache.invalidate();
        release_tx.send(()).unwrap();

        let stale = stale.join().unwrap();
        assert!(!cache.is_cached());

        release_tx.send(()).unwrap();
        let fresh = cache.get_index().unwrap();
        assert!(!Arc::ptr_eq(&stale, &fresh));
        assert!(cache.is_cached());
        assert_eq!(cache.build_count(), 2);
    }

    #[test]
    fn test_global_cache() {
        let cache = install(IndexCache::new(config(), source()));

        let first = get_index().unwrap();
        assert!(Arc::ptr_eq(&first, &get_index().unwrap()));

        invalidate();
        assert!(!cache.is_cached());
        let rebuilt = get_index().unwrap();
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(rebuilt.get_by_route("/fr/projets").unwrap().id, "fr/projects");
    }
}
