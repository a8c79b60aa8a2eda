//! Request-path resource reuse for HTTP clients.
//!
//! `fastpath` sits in front of a client's request dispatch and eliminates
//! repeated per-request work: keep-alive pool selection per transport
//! scheme, parsed-URL and normalized-header memoization, and receive
//! buffer reuse. Every structure is bounded, every operation is a
//! synchronous data-structure op, and the whole layer can be disabled at
//! runtime without breaking a single request.
//!
//! ```
//! use fastpath::{Optimizer, OptimizerConfig, Scheme};
//!
//! let optimizer = Optimizer::new(OptimizerConfig::default());
//!
//! let url = optimizer.resolve_url("http://example.com/health")?;
//! assert!(optimizer.pool_for(Scheme::from_url(&url)).is_some());
//!
//! let buf = optimizer.acquire_buffer();
//! // ... receive a response body into `buf` ...
//! optimizer.release_buffer(buf);
//! # Ok::<(), fastpath::FastpathError>(())
//! ```

pub mod cache;
pub mod optimizer;
pub mod pool;
pub mod stats;

// Re-export specific items for convenience
pub use cache::{cache_key, HeaderCache, UrlCache, UrlInput};
pub use optimizer::Optimizer;
pub use pool::{BufferPool, ConnectionPools, Scheme, SchemePool, SocketGauges};
pub use stats::{PoolStats, StatsSnapshot};

// Shared types consumers need alongside the API
pub use fastpath_common::{
    BufferPoolConfig, CacheConfig, FastpathError, OptimizerConfig, PoolConfig, Result, Scheduling,
};
