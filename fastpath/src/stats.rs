//! Occupancy snapshots for observability

use serde::Serialize;

/// Socket counts for one scheme pool at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Sockets currently serving requests
    pub active_sockets: usize,
    /// Parked sockets available for reuse
    pub idle_sockets: usize,
}

/// Point-in-time occupancy of every structure in the layer.
///
/// Taking a snapshot reads counters only; it never mutates cache or pool
/// state. Serializes for export to whatever sink the host wires up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Entries in the header cache
    pub header_cache_entries: usize,
    /// Entries in the URL cache
    pub url_cache_entries: usize,
    /// Buffers parked in the buffer pool
    pub pooled_buffers: usize,
    /// Plaintext pool socket counts
    pub plaintext_pool: PoolStats,
    /// Encrypted pool socket counts
    pub encrypted_pool: PoolStats,
}
