//! Configuration types for the `Fastpath` optimization layer

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_BUFFER_POOL_CAPACITY, DEFAULT_BUFFER_SIZE, DEFAULT_CACHE_CAPACITY,
    DEFAULT_IDLE_TIMEOUT, DEFAULT_KEEP_ALIVE_INTERVAL, DEFAULT_MAX_FREE_SOCKETS,
    DEFAULT_MAX_SOCKETS,
};
use crate::error::{FastpathError, Result};

/// Socket selection discipline for a scheme pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheduling {
    /// Hand out the socket that has been parked longest
    #[default]
    Fifo,
    /// Hand out the most recently parked socket
    Lifo,
}

/// Keep-alive pool configuration for one transport scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Enable keep-alive on pooled sockets
    pub keep_alive: bool,
    /// Interval between keep-alive probes
    pub keep_alive_interval: Duration,
    /// Maximum concurrent sockets
    pub max_sockets: usize,
    /// Maximum idle sockets retained for reuse
    pub max_free_sockets: usize,
    /// Idle timeout after which a parked socket is closed
    pub idle_timeout: Duration,
    /// Socket selection discipline
    pub scheduling: Scheduling,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            keep_alive: true,
            keep_alive_interval: DEFAULT_KEEP_ALIVE_INTERVAL,
            max_sockets: DEFAULT_MAX_SOCKETS,
            max_free_sockets: DEFAULT_MAX_FREE_SOCKETS,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            scheduling: Scheduling::Fifo,
        }
    }
}

/// Bounded lookup cache configuration (header and URL caches)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of retained entries
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Receive buffer pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferPoolConfig {
    /// Exact capacity of a poolable buffer in bytes
    pub buffer_size: usize,
    /// Maximum number of retained buffers
    pub capacity: usize,
}

impl Default for BufferPoolConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            capacity: DEFAULT_BUFFER_POOL_CAPACITY,
        }
    }
}

/// Combined configuration for one optimizer context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Pool for unencrypted transports
    pub plaintext_pool: PoolConfig,
    /// Pool for TLS transports
    pub encrypted_pool: PoolConfig,
    /// Header cache sizing
    pub header_cache: CacheConfig,
    /// URL cache sizing
    pub url_cache: CacheConfig,
    /// Receive buffer pool sizing
    pub buffer_pool: BufferPoolConfig,
    /// Start with connection pooling enabled
    pub enabled: bool,
}

impl OptimizerConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.header_cache.capacity == 0 || self.url_cache.capacity == 0 {
            return Err(FastpathError::Config(
                "cache capacity must be non-zero".into(),
            ));
        }
        if self.buffer_pool.buffer_size == 0 {
            return Err(FastpathError::Config(
                "buffer_size must be non-zero".into(),
            ));
        }
        if self.buffer_pool.capacity == 0 {
            return Err(FastpathError::Config(
                "buffer pool capacity must be non-zero".into(),
            ));
        }
        if self.plaintext_pool.max_sockets == 0 || self.encrypted_pool.max_sockets == 0 {
            return Err(FastpathError::Config("max_sockets must be non-zero".into()));
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            plaintext_pool: PoolConfig::default(),
            encrypted_pool: PoolConfig::default(),
            header_cache: CacheConfig::default(),
            url_cache: CacheConfig::default(),
            buffer_pool: BufferPoolConfig::default(),
            enabled: true,
        }
    }
}
