//! Memoized header sets keyed by caller-supplied cache keys
//!
//! Building a normalized header set for a request involves per-pair
//! validation and allocation; for clients that send the same few header
//! combinations on every request it is pure repeated work. This cache
//! memoizes the computed set under a canonical key.

use http::HeaderMap;
use parking_lot::Mutex;

use super::fifo::FifoMap;

/// Bounded FIFO cache of computed header sets.
///
/// The stored master copy is never handed out: hits and misses both return
/// their own copy, so callers are free to mutate the result.
#[derive(Debug)]
pub struct HeaderCache {
    inner: Mutex<FifoMap<HeaderMap>>,
}

impl HeaderCache {
    /// Create a cache retaining at most `capacity` header sets.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(FifoMap::new(capacity)),
        }
    }

    /// Fetch the header set for `key`, computing it on first use.
    ///
    /// The factory runs at most once per miss and is never invoked on a
    /// hit. It runs under the cache lock, so concurrent callers racing on
    /// the same uncached key cannot compute it twice.
    pub fn get<F>(&self, key: &str, factory: F) -> HeaderMap
    where
        F: FnOnce() -> HeaderMap,
    {
        let mut inner = self.inner.lock();
        if let Some(cached) = inner.get(key) {
            return cached.clone();
        }

        let computed = factory();
        inner.insert(key.to_owned(), computed.clone());
        computed
    }

    /// Number of cached header sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drop every cached header set.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

/// Build the canonical cache key for a header collection.
///
/// Each name/value pair is serialized as a `name: value` line; the lines
/// are sorted lexicographically and joined, so two collections holding the
/// same pairs in different insertion order produce the same key.
#[must_use]
pub fn cache_key(headers: &HeaderMap) -> String {
    let mut pairs: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            format!(
                "{}: {}",
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes())
            )
        })
        .collect();
    pairs.sort_unstable();
    pairs.join("\n")
}
