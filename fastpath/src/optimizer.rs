//! The optimizer context: toggle, pools, and caches in one injectable unit
//!
//! One `Optimizer` is built per client and shared by reference across its
//! requests. Every operation here is a synchronous data-structure op; the
//! blocking work (connecting, transferring bytes) lives in the transport
//! layer, which only ever receives a pool handle or a buffer from here.

use std::sync::atomic::{AtomicBool, Ordering};

use bytes::BytesMut;
use http::HeaderMap;
use tracing::debug;
use url::Url;

use fastpath_common::{OptimizerConfig, Result};

use crate::cache::{HeaderCache, UrlCache, UrlInput};
use crate::pool::{BufferPool, ConnectionPools, Scheme, SchemePool};
use crate::stats::{PoolStats, StatsSnapshot};

/// Resource-reuse context consulted by every outgoing request.
///
/// Owns both scheme pools, the header and URL caches, the receive buffer
/// pool, and the enable toggle. The toggle gates pool lookup only; the
/// caches and buffer pool stay active while pooling is disabled.
#[derive(Debug)]
pub struct Optimizer {
    enabled: AtomicBool,
    pools: ConnectionPools,
    headers: HeaderCache,
    urls: UrlCache,
    buffers: BufferPool,
}

impl Optimizer {
    /// Build an optimizer context from `config`.
    #[must_use]
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            enabled: AtomicBool::new(config.enabled),
            pools: ConnectionPools::new(config.plaintext_pool, config.encrypted_pool),
            headers: HeaderCache::new(config.header_cache.capacity),
            urls: UrlCache::new(config.url_cache.capacity),
            buffers: BufferPool::new(config.buffer_pool.buffer_size, config.buffer_pool.capacity),
        }
    }

    /// Turn connection pooling on or off for all subsequent lookups.
    ///
    /// Takes effect immediately; pools already handed to in-flight
    /// requests are not retracted.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        debug!(
            "connection pooling {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Whether connection pooling is currently enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Pool lookup for a request's target scheme.
    ///
    /// Returns `None` while pooling is disabled; the caller falls back to
    /// an unpooled connection.
    #[must_use]
    pub fn pool_for(&self, scheme: Scheme) -> Option<&SchemePool> {
        if self.is_enabled() {
            Some(self.pools.pool_for(scheme))
        } else {
            None
        }
    }

    /// Fetch the cached header set for `key`, computing it on first use.
    ///
    /// See [`HeaderCache::get`] for the factory contract.
    pub fn cached_headers<F>(&self, key: &str, factory: F) -> HeaderMap
    where
        F: FnOnce() -> HeaderMap,
    {
        self.headers.get(key, factory)
    }

    /// Resolve text or an already-parsed URL to a parsed URL.
    ///
    /// See [`UrlCache::resolve`] for caching and error semantics.
    pub fn resolve_url<'a>(&self, input: impl Into<UrlInput<'a>>) -> Result<Url> {
        self.urls.resolve(input)
    }

    /// Acquire a receive buffer of the default pooled size.
    #[must_use]
    pub fn acquire_buffer(&self) -> BytesMut {
        self.buffers.acquire()
    }

    /// Acquire a receive buffer with at least `capacity` bytes available.
    #[must_use]
    pub fn acquire_buffer_with_capacity(&self, capacity: usize) -> BytesMut {
        self.buffers.acquire_with_capacity(capacity)
    }

    /// Return a receive buffer to the pool once the body has been consumed.
    pub fn release_buffer(&self, buf: BytesMut) {
        self.buffers.release(buf);
    }

    /// Clear the header cache, URL cache, and buffer pool.
    ///
    /// The toggle keeps its state and the connection pools keep their
    /// sockets; only memoized data is dropped.
    pub fn reset_caches(&self) {
        self.headers.clear();
        self.urls.clear();
        self.buffers.clear();
        debug!("header cache, url cache, and buffer pool reset");
    }

    /// Read-only occupancy snapshot of all four structures.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        let plaintext = self.pools.pool_for(Scheme::Plaintext).gauges();
        let encrypted = self.pools.pool_for(Scheme::Encrypted).gauges();

        StatsSnapshot {
            header_cache_entries: self.headers.len(),
            url_cache_entries: self.urls.len(),
            pooled_buffers: self.buffers.len(),
            plaintext_pool: PoolStats {
                active_sockets: plaintext.active(),
                idle_sockets: plaintext.idle(),
            },
            encrypted_pool: PoolStats {
                active_sockets: encrypted.active(),
                idle_sockets: encrypted.idle(),
            },
        }
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}
