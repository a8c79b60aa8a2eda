//! Common types for `Fastpath`

pub mod config;
pub mod constants;
pub mod error;

pub use config::{BufferPoolConfig, CacheConfig, OptimizerConfig, PoolConfig, Scheduling};
pub use constants::{
    DEFAULT_BUFFER_POOL_CAPACITY, DEFAULT_BUFFER_SIZE, DEFAULT_CACHE_CAPACITY,
    DEFAULT_IDLE_TIMEOUT, DEFAULT_KEEP_ALIVE_INTERVAL, DEFAULT_MAX_FREE_SOCKETS,
    DEFAULT_MAX_SOCKETS,
};
pub use error::{FastpathError, Result};
