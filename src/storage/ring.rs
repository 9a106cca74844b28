use std::mem::replace;

#[derive(Debug, Clone)]
enum Entry<T> {
    Vacant,
    Occupied(T),
}

// -----------------------------------------------------------------------------
// 		- RingBuffer -
// -----------------------------------------------------------------------------
/// `RingBuffer`: a fixed capacity FIFO.
///
/// Items are pushed at `tail` and popped from `head`, both wrapping around at
/// the capacity.
///
/// Slots are allocated and initialised the first time `tail` reaches them,
/// so a buffer never holds more memory than its high water mark needs.
/// A popped item is moved out of its slot, leaving the slot vacant.
///
/// # Example
///
/// ```
/// use syncq::storage::RingBuffer;
///
/// let mut ring = RingBuffer::with_capacity(2);
/// ring.push("foo");
/// ring.push("bar");
/// assert!(ring.is_full());
///
/// assert_eq!(ring.pop(), "foo");
/// ring.push("baz");
/// assert_eq!(ring.pop(), "bar");
/// assert_eq!(ring.pop(), "baz");
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    inner: Vec<Entry<T>>,
    capacity: usize,
    head: usize,
    tail: usize,
    length: usize,
}


// -----------------------------------------------------------------------------
// 		- Impl RingBuffer -
// -----------------------------------------------------------------------------
impl<T> RingBuffer<T> {
    /// Create an empty `RingBuffer` holding at most `cap` items.
    ///
    /// # Panics
    ///
    /// Panics if `cap` is zero.
    pub fn with_capacity(cap: usize) -> Self {
        assert!(cap > 0, "ring buffer capacity has to be greater than zero");
        Self {
            inner: Vec::new(),
            capacity: cap,
            head: 0,
            tail: 0,
            length: 0,
        }
    }

    /// Return the capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the collection has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    fn advance(&self, index: usize) -> usize {
        if index + 1 < self.capacity {
            index + 1
        } else {
            0
        }
    }

    /// Push a value into the slot at `tail`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full.
    pub fn push(&mut self, v: T) {
        assert!(!self.is_full(), "push into a full ring buffer (capacity {})", self.capacity);

        if self.tail == self.inner.len() {
            // First time this slot is reached
            self.inner.push(Entry::Occupied(v));
        } else {
            let prev = replace(&mut self.inner[self.tail], Entry::Occupied(v));
            if let Entry::Occupied(_) = prev {
                panic!("attempted to push into occupied slot: {}", self.tail);
            }
        }

        self.tail = self.advance(self.tail);
        self.length += 1;
    }

    /// Move the value out of the slot at `head`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn pop(&mut self) -> T {
        assert!(!self.is_empty(), "pop from an empty ring buffer");

        let index = self.head;
        let prev = replace(&mut self.inner[index], Entry::Vacant);
        match prev {
            Entry::Occupied(v) => {
                self.head = self.advance(index);
                self.length -= 1;
                v
            }
            Entry::Vacant => panic!("attempted to pop from vacant slot: {}", index),
        }
    }
}
