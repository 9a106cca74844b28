use crate::sync::Capacity;

use super::Storage;

// -----------------------------------------------------------------------------
// 		- Tokens -
// -----------------------------------------------------------------------------
/// Storage without a payload.
///
/// Only the number of pending tokens is tracked, which is all that is
/// needed when the queue is used to signal rather than to move data.
#[derive(Debug, Clone)]
pub struct Tokens {
    count: usize,
    capacity: Capacity,
}

impl Storage for Tokens {
    type Item = ();

    /// # Panics
    ///
    /// Panics if `capacity` is `Capacity::Bounded(0)`.
    fn with_capacity(capacity: Capacity) -> Self {
        assert!(capacity != Capacity::Bounded(0), "token storage capacity has to be greater than zero");
        Self {
            count: 0,
            capacity,
        }
    }

    fn push(&mut self, _: ()) {
        assert!(!self.is_full(), "push into full token storage ({})", self.capacity);
        self.count += 1;
    }

    fn pop(&mut self) {
        assert!(self.count > 0, "pop from empty token storage");
        self.count -= 1;
    }

    fn len(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> Capacity {
        self.capacity
    }
}
