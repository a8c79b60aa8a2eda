//! Memoized URL parsing keyed by exact input text
//!
//! Keys are the raw input string, not the canonical form: two spellings of
//! the same URL occupy two entries. Canonicalizing the key would cost a
//! parse per lookup, which is exactly what the cache exists to avoid.

use parking_lot::Mutex;
use url::Url;

use fastpath_common::{FastpathError, Result};

use super::fifo::FifoMap;

/// Input to [`UrlCache::resolve`]: raw text, or a URL the caller already
/// parsed.
#[derive(Debug, Clone)]
pub enum UrlInput<'a> {
    /// URL text to be parsed and memoized
    Text(&'a str),
    /// Already-parsed URL, trusted as-is
    Parsed(Url),
}

impl<'a> From<&'a str> for UrlInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for UrlInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<Url> for UrlInput<'a> {
    fn from(url: Url) -> Self {
        Self::Parsed(url)
    }
}

/// Bounded FIFO cache of parsed URLs.
///
/// Hits hand out an independent copy of the cached parse, never the cached
/// master itself.
#[derive(Debug)]
pub struct UrlCache {
    inner: Mutex<FifoMap<Url>>,
}

impl UrlCache {
    /// Create a cache retaining at most `capacity` parsed URLs.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(FifoMap::new(capacity)),
        }
    }

    /// Resolve `input` to a parsed URL.
    ///
    /// Already-parsed input is returned unchanged and bypasses the cache
    /// entirely. Text input is looked up by its exact spelling; a miss
    /// parses it, stores the parse, and returns it. A failed parse
    /// propagates to the caller and leaves no cache entry.
    pub fn resolve<'a>(&self, input: impl Into<UrlInput<'a>>) -> Result<Url> {
        match input.into() {
            UrlInput::Parsed(url) => Ok(url),
            UrlInput::Text(text) => {
                let mut inner = self.inner.lock();
                if let Some(cached) = inner.get(text) {
                    return Ok(cached.clone());
                }

                let parsed =
                    Url::parse(text).map_err(|source| FastpathError::UrlParse {
                        input: text.to_owned(),
                        source,
                    })?;
                inner.insert(text.to_owned(), parsed.clone());
                Ok(parsed)
            }
        }
    }

    /// Number of cached parses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drop every cached parse.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
