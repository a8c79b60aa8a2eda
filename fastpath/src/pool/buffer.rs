//! Fixed-size receive buffer pooling
//!
//! Pools `BytesMut` buffers of one exact capacity so the body-receive path
//! avoids a fresh allocation per request. Uses crossbeam's `ArrayQueue`:
//! a release into a full pool is a lock-free drop, never an error.

use bytes::BytesMut;
use crossbeam_queue::ArrayQueue;
use tracing::debug;

/// Bounded pool of same-sized receive buffers.
///
/// Only buffers whose capacity exactly matches `buffer_size` are ever
/// stored; anything else handed to [`release`](Self::release) is dropped.
#[derive(Debug)]
pub struct BufferPool {
    queue: ArrayQueue<BytesMut>,
    buffer_size: usize,
}

impl BufferPool {
    /// Create a pool of `capacity` slots for buffers of `buffer_size` bytes.
    #[must_use]
    pub fn new(buffer_size: usize, capacity: usize) -> Self {
        Self {
            queue: ArrayQueue::new(capacity),
            buffer_size,
        }
    }

    /// Acquire a buffer of the pool's fixed size.
    #[must_use]
    pub fn acquire(&self) -> BytesMut {
        self.acquire_with_capacity(self.buffer_size)
    }

    /// Acquire a buffer with at least `capacity` bytes available.
    ///
    /// Requests that fit the fixed buffer size are served from the pool
    /// when possible; larger requests and pool misses are fresh
    /// allocations of the requested capacity. Pooled buffers come back
    /// empty, but their spare capacity is not zeroed.
    #[must_use]
    pub fn acquire_with_capacity(&self, capacity: usize) -> BytesMut {
        if capacity <= self.buffer_size {
            if let Some(buf) = self.queue.pop() {
                return buf;
            }
        }
        BytesMut::with_capacity(capacity)
    }

    /// Return a buffer to the pool.
    ///
    /// Buffers whose capacity does not exactly match the pool's fixed size
    /// are dropped, as is any buffer released while the pool is full.
    /// Neither case is an error; both are visible only through occupancy.
    pub fn release(&self, mut buf: BytesMut) {
        if buf.capacity() != self.buffer_size {
            debug!(
                "dropping buffer with non-pooled capacity {} (pool buffers are {} bytes)",
                buf.capacity(),
                self.buffer_size
            );
            return;
        }

        buf.clear();
        // Push failure means the pool is at capacity; the buffer is dropped
        let _ = self.queue.push(buf);
    }

    /// Drop every pooled buffer. Buffers already handed out are unaffected.
    pub fn clear(&self) {
        while self.queue.pop().is_some() {}
    }

    /// Number of buffers currently parked in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the pool holds no buffers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Exact capacity of a poolable buffer in bytes.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Maximum number of buffers the pool retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }
}
