#![deny(missing_docs)]
//! # Synchronised queues
//!
//! Syncq is a blocking FIFO queue for any number of producer and consumer
//! threads, built on a mutex and two condition variables.
//!
//! * A queue is either bounded (producers block while it's full) or unbounded.
//! * A queue is finished once, after which pushes are ignored and consumers
//!   drain what is left before `pop` returns `None`.
//! * A [`TokenQueue`] carries no values, only a count.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use syncq::Queue;
//!
//! let queue = Arc::new(Queue::unbounded());
//!
//! let consumers = (0..2).map(|_| {
//!     let queue = queue.clone();
//!     thread::spawn(move || queue.iter().count())
//! }).collect::<Vec<_>>();
//!
//! for i in 0..1000 {
//!     queue.push(i);
//! }
//! queue.set_finished();
//!
//! let total: usize = consumers.into_iter().map(|h| h.join().unwrap()).sum();
//! assert_eq!(total, 1000);
//! ```
//!
//! [`TokenQueue`]: sync/queue/type.TokenQueue.html
#[macro_use] extern crate log;

pub mod errors;
pub mod storage;
pub mod sync;

// Pub uses
pub use crate::sync::Capacity;
pub use crate::sync::queue::{Queue, SyncQueue, TokenQueue};
