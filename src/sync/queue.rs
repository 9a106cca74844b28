//! Blocking FIFO queue
use std::fmt;

use parking_lot::{Condvar, Mutex, MutexGuard};

use crate::errors::{Result, TryPushError};
use crate::storage::{Slots, Storage, Tokens};

use super::Capacity;

/// A queue of `T`, backed by a ring buffer when bounded
/// and a growable fifo when unbounded.
pub type Queue<T> = SyncQueue<Slots<T>>;

/// A queue that only counts, see [`push_token`] and [`pop_token`].
///
/// [`push_token`]: struct.SyncQueue.html#method.push_token
/// [`pop_token`]: struct.SyncQueue.html#method.pop_token
pub type TokenQueue = SyncQueue<Tokens>;

#[derive(Clone)]
struct State<S> {
    storage: S,
    finished: bool,
}

// -----------------------------------------------------------------------------
// 		- Sync queue -
// -----------------------------------------------------------------------------
/// A multi producer, multi consumer FIFO queue.
///
/// A bounded queue applies back pressure: [`push`] blocks while the queue is
/// full. [`pop`] blocks while the queue is empty.
///
/// Once [`set_finished`] is called the queue stops accepting values, and
/// consumers drain whatever is left. When the queue is both finished and
/// empty [`pop`] returns `None` instead of blocking, so consumers can
/// simply loop until they get a `None`.
///
/// Dropping the queue finishes it.
///
/// ```
/// # use std::sync::Arc;
/// # use std::thread;
/// use syncq::sync::queue::Queue;
///
/// let queue = Arc::new(Queue::bounded(4));
///
/// let producer = {
///     let queue = queue.clone();
///     thread::spawn(move || {
///         for i in 0..100 {
///             queue.push(i);
///         }
///         queue.set_finished();
///     })
/// };
///
/// let mut received = Vec::new();
/// while let Some(val) = queue.pop() {
///     received.push(val);
/// }
///
/// producer.join().unwrap();
/// assert_eq!(received, (0..100).collect::<Vec<_>>());
/// ```
///
/// [`push`]: #method.push
/// [`pop`]: #method.pop
/// [`set_finished`]: #method.set_finished
pub struct SyncQueue<S: Storage> {
    state: Mutex<State<S>>,
    not_empty: Condvar,
    not_full: Condvar,
    capacity: Capacity,
}

impl<S: Storage> SyncQueue<S> {
    /// Create a queue around an existing storage.
    /// Any items already in the storage are poppable.
    pub fn from_storage(storage: S) -> Self {
        let capacity = storage.capacity();
        debug!("new queue, capacity: {}", capacity);

        Self {
            state: Mutex::new(State {
                storage,
                finished: false,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
            capacity,
        }
    }

    /// Create a queue with the given capacity.
    ///
    /// ```
    /// # use syncq::sync::Capacity;
    /// # use syncq::sync::queue::Queue;
    /// # use syncq::errors::Error;
    /// let queue = Queue::<u32>::with_capacity(Capacity::Bounded(8)).unwrap();
    /// assert!(queue.is_bounded());
    ///
    /// let err = Queue::<u32>::with_capacity(Capacity::Bounded(0)).err();
    /// assert_eq!(err, Some(Error::ZeroCapacity));
    /// ```
    pub fn with_capacity(capacity: Capacity) -> Result<Self> {
        let capacity = capacity.validate()?;
        Ok(Self::from_storage(S::with_capacity(capacity)))
    }

    /// Create an unbounded queue
    pub fn unbounded() -> Self {
        Self::from_storage(S::with_capacity(Capacity::Unbounded))
    }

    /// Create a bounded queue.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn bounded(capacity: usize) -> Self {
        assert!(capacity > 0, "bounded queue capacity has to be greater than zero");
        Self::from_storage(S::with_capacity(Capacity::Bounded(capacity)))
    }

    /// Push a value at the back of the queue.
    ///
    /// If the queue is full this blocks until a consumer makes room or
    /// the queue is finished.
    /// Pushing into a finished queue does nothing: the value is dropped.
    pub fn push(&self, item: S::Item) {
        let mut state = self.state.lock();
        while state.storage.is_full() && !state.finished {
            self.not_full.wait(&mut state);
        }

        if state.finished {
            drop(state);
            trace!("push into finished queue, dropping value");
            self.wake_all();
            return;
        }

        self.insert(state, item);
    }

    /// Push a value without blocking.
    ///
    /// The value is handed back in the error if the queue is full or finished.
    ///
    /// ```
    /// # use syncq::sync::queue::Queue;
    /// # use syncq::errors::TryPushError;
    /// let queue = Queue::bounded(1);
    /// assert!(queue.try_push(1).is_ok());
    /// assert_eq!(queue.try_push(2), Err(TryPushError::Full(2)));
    ///
    /// queue.set_finished();
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.try_push(3), Err(TryPushError::Finished(3)));
    /// ```
    pub fn try_push(&self, item: S::Item) -> std::result::Result<(), TryPushError<S::Item>> {
        let state = self.state.lock();
        if state.finished {
            return Err(TryPushError::Finished(item));
        }
        if state.storage.is_full() {
            return Err(TryPushError::Full(item));
        }

        self.insert(state, item);
        Ok(())
    }

    // Caller has checked that there is room and that the queue is not finished
    fn insert(&self, mut state: MutexGuard<State<S>>, item: S::Item) {
        state.storage.push(item);
        let has_room = !state.storage.is_full();
        drop(state);

        self.not_empty.notify_one();
        // Let the next blocked producer in
        if self.capacity.is_bounded() && has_room {
            self.not_full.notify_one();
        }
    }

    /// Pop the value at the front of the queue.
    ///
    /// If the queue is empty this blocks until a value is pushed or the
    /// queue is finished.
    /// Returns `None` once the queue is finished and every value has been popped.
    pub fn pop(&self) -> Option<S::Item> {
        let mut state = self.state.lock();
        while state.storage.is_empty() && !state.finished {
            self.not_empty.wait(&mut state);
        }

        if state.storage.is_empty() {
            debug_assert!(state.finished);
            drop(state);
            self.wake_all();
            return None;
        }

        let item = state.storage.pop();
        let remaining = state.storage.len();
        let finished = state.finished;
        drop(state);

        if remaining > 0 {
            self.not_empty.notify_one();
        } else if finished {
            // Drained: nothing more will ever arrive
            self.wake_all();
        }

        if self.capacity.is_bounded() {
            self.not_full.notify_one();
        }

        Some(item)
    }

    /// Pop the value at the front of the queue without blocking.
    /// Returns `None` if the queue is empty, finished or not.
    pub fn try_pop(&self) -> Option<S::Item> {
        let mut state = self.state.lock();
        if state.storage.is_empty() {
            return None;
        }

        let item = state.storage.pop();
        drop(state);

        if self.capacity.is_bounded() {
            self.not_full.notify_one();
        }

        Some(item)
    }

    /// Mark the queue as finished.
    ///
    /// Every blocked producer and consumer is woken up. Values pushed after
    /// this are dropped, values already in the queue can still be popped.
    /// Calling this more than once has no further effect.
    pub fn set_finished(&self) {
        let mut state = self.state.lock();
        if !state.finished {
            state.finished = true;
            debug!("queue finished, {} value(s) left", state.storage.len());
        }
        drop(state);

        self.wake_all();
    }

    fn wake_all(&self) {
        self.not_empty.notify_all();
        // Producers only wait on a bounded queue
        if self.capacity.is_bounded() {
            self.not_full.notify_all();
        }
    }

    /// `true` once [`set_finished`] has been called
    ///
    /// [`set_finished`]: #method.set_finished
    pub fn is_finished(&self) -> bool {
        self.state.lock().finished
    }

    /// Number of values in the queue
    pub fn len(&self) -> usize {
        self.state.lock().storage.len()
    }

    /// `true` if the queue holds no values
    pub fn is_empty(&self) -> bool {
        self.state.lock().storage.is_empty()
    }

    /// The capacity the queue was created with
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// `true` if the queue has no limit
    pub fn is_unbounded(&self) -> bool {
        self.capacity.is_unbounded()
    }

    /// `true` if the queue has a limit
    pub fn is_bounded(&self) -> bool {
        self.capacity.is_bounded()
    }

    /// Blocking iterator over popped values.
    /// Ends once the queue is finished and drained.
    pub fn iter(&self) -> Iter<S> {
        Iter { queue: self }
    }
}

// -----------------------------------------------------------------------------
// 		- Token queue -
// -----------------------------------------------------------------------------
impl SyncQueue<Tokens> {
    /// Push a token, blocking while the queue is full.
    /// Does nothing if the queue is finished.
    pub fn push_token(&self) {
        self.push(())
    }

    /// Push a token without blocking.
    /// Returns `false` if the queue is full or finished.
    pub fn try_push_token(&self) -> bool {
        self.try_push(()).is_ok()
    }

    /// Take a token, blocking while the queue is empty.
    /// Returns `false` once the queue is finished and out of tokens.
    pub fn pop_token(&self) -> bool {
        self.pop().is_some()
    }

    /// Take a token without blocking.
    /// Returns `false` if there are no tokens.
    pub fn try_pop_token(&self) -> bool {
        self.try_pop().is_some()
    }
}

// -----------------------------------------------------------------------------
// 		- Iter -
// -----------------------------------------------------------------------------
/// Blocking iterator, see [`SyncQueue::iter`]
///
/// [`SyncQueue::iter`]: struct.SyncQueue.html#method.iter
pub struct Iter<'a, S: Storage> {
    queue: &'a SyncQueue<S>,
}

impl<'a, S: Storage> Iterator for Iter<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }
}

impl<'a, S: Storage> IntoIterator for &'a SyncQueue<S> {
    type Item = S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// 		- Clone / Debug / Drop -
// -----------------------------------------------------------------------------
impl<S: Storage + Clone> Clone for SyncQueue<S> {
    /// Snapshot of the values and the finished flag.
    /// Waiters on `self` are not shared with the clone.
    fn clone(&self) -> Self {
        let state = State::clone(&self.state.lock());
        Self {
            state: Mutex::new(state),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
            capacity: self.capacity,
        }
    }
}

impl<S: Storage> fmt::Debug for SyncQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("SyncQueue")
            .field("capacity", &self.capacity)
            .field("len", &state.storage.len())
            .field("finished", &state.finished)
            .finish()
    }
}

impl<S: Storage> Drop for SyncQueue<S> {
    fn drop(&mut self) {
        self.set_finished();
    }
}
