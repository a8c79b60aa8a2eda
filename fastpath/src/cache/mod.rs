//! Bounded memoization caches consulted on every request

pub mod fifo;
pub mod headers;
pub mod url;

// Re-export specific items for convenience
pub use fifo::FifoMap;
pub use headers::{cache_key, HeaderCache};
pub use url::{UrlCache, UrlInput};
