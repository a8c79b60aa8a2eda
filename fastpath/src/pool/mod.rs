//! Connection pool selection and receive buffer pooling

pub mod buffer;
pub mod conn;

// Re-export specific items for convenience
pub use buffer::BufferPool;
pub use conn::{ConnectionPools, Scheme, SchemePool, SocketGauges};
