//! Backing storage for a [`SyncQueue`].
//!
//! A storage is a plain, single threaded FIFO. It does not wait and it does not
//! lock; all of that is done by the [`SyncQueue`] owning it.
//!
//! Pushing into a full storage or popping from an empty one is a bug in the
//! caller and panics.
//!
//! [`SyncQueue`]: ../sync/queue/struct.SyncQueue.html
use crate::sync::Capacity;

mod fifo;
mod ring;
mod tokens;

pub use fifo::Fifo;
pub use ring::RingBuffer;
pub use tokens::Tokens;

// -----------------------------------------------------------------------------
// 		- Storage -
// -----------------------------------------------------------------------------
/// Single threaded FIFO storage.
pub trait Storage {
    /// The item moved in and out of the storage.
    /// `()` for storages that only count.
    type Item;

    /// Create an empty storage.
    /// `capacity` is never `Capacity::Bounded(0)`.
    fn with_capacity(capacity: Capacity) -> Self;

    /// Add an item at the back.
    ///
    /// # Panics
    ///
    /// Panics if the storage is full.
    fn push(&mut self, item: Self::Item);

    /// Remove the item at the front.
    ///
    /// # Panics
    ///
    /// Panics if the storage is empty.
    fn pop(&mut self) -> Self::Item;

    /// Number of items currently held
    fn len(&self) -> usize;

    /// The configured capacity
    fn capacity(&self) -> Capacity;

    /// `true` if there are no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if no more items can be pushed.
    /// Always `false` for unbounded storage.
    fn is_full(&self) -> bool {
        match self.capacity() {
            Capacity::Unbounded => false,
            Capacity::Bounded(cap) => self.len() == cap,
        }
    }
}

// -----------------------------------------------------------------------------
// 		- Slots -
// -----------------------------------------------------------------------------
/// Item storage picking a [`RingBuffer`] for bounded capacities
/// and a [`Fifo`] for unbounded ones.
///
/// [`RingBuffer`]: struct.RingBuffer.html
/// [`Fifo`]: struct.Fifo.html
#[derive(Debug, Clone)]
pub enum Slots<T> {
    /// Fixed size ring buffer
    Bounded(RingBuffer<T>),
    /// Growable queue
    Unbounded(Fifo<T>),
}

impl<T> Storage for Slots<T> {
    type Item = T;

    fn with_capacity(capacity: Capacity) -> Self {
        match capacity {
            Capacity::Bounded(cap) => Slots::Bounded(RingBuffer::with_capacity(cap)),
            Capacity::Unbounded => Slots::Unbounded(Fifo::new()),
        }
    }

    fn push(&mut self, item: T) {
        match self {
            Slots::Bounded(ring) => ring.push(item),
            Slots::Unbounded(fifo) => fifo.push(item),
        }
    }

    fn pop(&mut self) -> T {
        match self {
            Slots::Bounded(ring) => ring.pop(),
            Slots::Unbounded(fifo) => fifo.pop(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Slots::Bounded(ring) => ring.len(),
            Slots::Unbounded(fifo) => fifo.len(),
        }
    }

    fn capacity(&self) -> Capacity {
        match self {
            Slots::Bounded(ring) => Capacity::Bounded(ring.capacity()),
            Slots::Unbounded(_) => Capacity::Unbounded,
        }
    }

    fn is_full(&self) -> bool {
        match self {
            Slots::Bounded(ring) => ring.is_full(),
            Slots::Unbounded(_) => false,
        }
    }
}
