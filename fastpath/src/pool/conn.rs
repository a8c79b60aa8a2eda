//! Persistent keep-alive pool selection per transport scheme
//!
//! The manager owns one long-lived pool per scheme and only ever selects
//! between them. Opening, closing, and tracking individual sockets stays
//! with the transport layer, which reports occupancy back through the
//! gauges so stats snapshots can include socket counts.

use std::sync::atomic::{AtomicUsize, Ordering};

use url::Url;

use fastpath_common::PoolConfig;

/// Transport scheme served by a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Unencrypted transport (`http`)
    Plaintext,
    /// TLS transport (`https`)
    Encrypted,
}

impl Scheme {
    /// Map a URL scheme string to a pool scheme.
    ///
    /// Accepts both `"https"` and `"https:"`; anything that is not a known
    /// encrypted scheme falls back to the plaintext pool.
    #[must_use]
    pub fn from_url_scheme(scheme: &str) -> Self {
        if scheme.trim_end_matches(':').eq_ignore_ascii_case("https") {
            Self::Encrypted
        } else {
            Self::Plaintext
        }
    }

    /// Pool scheme for a parsed URL.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self::from_url_scheme(url.scheme())
    }
}

/// Socket occupancy gauges for one scheme pool.
///
/// The transport layer owns the actual sockets and reports their
/// transitions here; this layer only reads the counts. Relaxed atomics are
/// enough since the gauges are advisory observability data, not
/// synchronization points.
#[derive(Debug, Default)]
pub struct SocketGauges {
    active: AtomicUsize,
    idle: AtomicUsize,
}

impl SocketGauges {
    /// A new socket was opened and put to work.
    pub fn socket_opened(&self) {
        self.active.fetch_add(1, Ordering::Relaxed);
    }

    /// An active socket was closed outright.
    pub fn socket_closed(&self) {
        saturating_decr(&self.active);
    }

    /// An active socket finished its request and was parked for reuse.
    pub fn socket_parked(&self) {
        saturating_decr(&self.active);
        self.idle.fetch_add(1, Ordering::Relaxed);
    }

    /// A parked socket was picked up to serve a new request.
    pub fn socket_reused(&self) {
        saturating_decr(&self.idle);
        self.active.fetch_add(1, Ordering::Relaxed);
    }

    /// A parked socket hit its idle timeout and was closed.
    pub fn idle_socket_closed(&self) {
        saturating_decr(&self.idle);
    }

    /// Sockets currently serving requests.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }

    /// Parked sockets available for reuse.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.idle.load(Ordering::Relaxed)
    }
}

fn saturating_decr(counter: &AtomicUsize) {
    let _ = counter.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| v.checked_sub(1));
}

/// One persistent keep-alive pool: configuration plus occupancy gauges.
#[derive(Debug)]
pub struct SchemePool {
    config: PoolConfig,
    gauges: SocketGauges,
}

impl SchemePool {
    /// Create a pool from its configuration.
    #[must_use]
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            gauges: SocketGauges::default(),
        }
    }

    /// The pool's keep-alive configuration.
    #[must_use]
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Socket gauges for the transport layer to report into.
    #[must_use]
    pub fn gauges(&self) -> &SocketGauges {
        &self.gauges
    }
}

/// The two long-lived scheme pools.
///
/// Both exist for the lifetime of the owning optimizer and are never
/// recreated; disabling optimizations hides them from lookup without
/// tearing anything down.
#[derive(Debug)]
pub struct ConnectionPools {
    plaintext: SchemePool,
    encrypted: SchemePool,
}

impl ConnectionPools {
    /// Create both pools from their per-scheme configurations.
    #[must_use]
    pub fn new(plaintext: PoolConfig, encrypted: PoolConfig) -> Self {
        Self {
            plaintext: SchemePool::new(plaintext),
            encrypted: SchemePool::new(encrypted),
        }
    }

    /// Select the pool for `scheme`. Pure lookup, no side effects.
    #[must_use]
    pub fn pool_for(&self, scheme: Scheme) -> &SchemePool {
        match scheme {
            Scheme::Plaintext => &self.plaintext,
            Scheme::Encrypted => &self.encrypted,
        }
    }
}
