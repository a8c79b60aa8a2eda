//! Default sizing for `Fastpath` pools and caches.
//!
//! Use these constants instead of magic numbers so defaults stay consistent
//! across the library, tests, and benchmarks.

use std::time::Duration;

/// Default keep-alive probe interval for pooled sockets (30s).
pub const DEFAULT_KEEP_ALIVE_INTERVAL: Duration = Duration::from_millis(30_000);

/// Default maximum concurrent sockets per scheme pool.
pub const DEFAULT_MAX_SOCKETS: usize = 256;

/// Default maximum idle sockets retained per scheme pool.
pub const DEFAULT_MAX_FREE_SOCKETS: usize = 256;

/// Default idle timeout after which a parked socket is closed (60s).
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Default entry capacity for the header and URL caches.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Default capacity of a pooled receive buffer in bytes (16KB).
pub const DEFAULT_BUFFER_SIZE: usize = 16 * 1024;

/// Default maximum number of pooled receive buffers.
pub const DEFAULT_BUFFER_POOL_CAPACITY: usize = 100;
