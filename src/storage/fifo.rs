use std::collections::VecDeque;

// -----------------------------------------------------------------------------
// 		- Fifo -
// -----------------------------------------------------------------------------
/// Unbounded FIFO. Grows as needed and is never full.
#[derive(Debug, Clone)]
pub struct Fifo<T> {
    inner: VecDeque<T>,
}

impl<T> Fifo<T> {
    /// Create an empty `Fifo`
    pub fn new() -> Self {
        Self {
            inner: VecDeque::new(),
        }
    }

    /// Push a value at the back
    pub fn push(&mut self, v: T) {
        self.inner.push_back(v);
    }

    /// Remove the value at the front.
    ///
    /// # Panics
    ///
    /// Panics if the fifo is empty.
    pub fn pop(&mut self) -> T {
        match self.inner.pop_front() {
            Some(v) => v,
            None => panic!("pop from an empty fifo"),
        }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no values
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}
