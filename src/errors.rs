//! SYNCQ default `Error`
use std::error;
use std::fmt;

/// Result type: `std::result::Result<T, Error>`
pub type Result<T> = std::result::Result<T, Error>;


/// Wrapping error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bounded queue needs room for at least one item
    ZeroCapacity,

    /// The capacity could not be parsed.
    /// Accepted values are "unbounded" or a positive integer
    InvalidCapacity(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "bounded capacity has to be greater than zero"),
            Error::InvalidCapacity(s) => write!(f, "invalid capacity: {:?}", s),
        }
    }
}

impl error::Error for Error {}


// -----------------------------------------------------------------------------
// 		- Parse int error -
// -----------------------------------------------------------------------------
impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Error {
        Error::InvalidCapacity(err.to_string())
    }
}


// -----------------------------------------------------------------------------
// 		- Try push error -
// -----------------------------------------------------------------------------
/// Returned by [`try_push`] when the value was not queued.
/// The value is handed back to the caller.
///
/// [`try_push`]: ../sync/queue/struct.SyncQueue.html#method.try_push
#[derive(PartialEq, Eq)]
pub enum TryPushError<T> {
    /// The queue is bounded and at capacity
    Full(T),

    /// The queue is finished and no longer accepts values
    Finished(T),
}

impl<T> TryPushError<T> {
    /// Get the value that was rejected
    pub fn into_inner(self) -> T {
        match self {
            TryPushError::Full(val) | TryPushError::Finished(val) => val,
        }
    }

    /// `true` if the push failed because the queue was full
    pub fn is_full(&self) -> bool {
        match self {
            TryPushError::Full(_) => true,
            TryPushError::Finished(_) => false,
        }
    }

    /// `true` if the push failed because the queue was finished
    pub fn is_finished(&self) -> bool {
        !self.is_full()
    }
}

// Don't require `T: Debug`, the value is usually not interesting
impl<T> fmt::Debug for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TryPushError::Full(_) => write!(f, "Full(..)"),
            TryPushError::Finished(_) => write!(f, "Finished(..)"),
        }
    }
}

impl<T> fmt::Display for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TryPushError::Full(_) => write!(f, "pushing into a full queue"),
            TryPushError::Finished(_) => write!(f, "pushing into a finished queue"),
        }
    }
}

impl<T> error::Error for TryPushError<T> {}
