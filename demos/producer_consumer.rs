use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use syncq::errors::Result;
use syncq::{Capacity, Queue};

const RANGE_PER_PRODUCER: usize = 10_000;
const PRODUCERS: usize = 5;
const CONSUMERS: usize = 5;

// -----------------------------------------------------------------------------
// 		- Producer -
// 		The last producer to complete finishes the queue
// -----------------------------------------------------------------------------
fn producer(id: usize, queue: Arc<Queue<Box<usize>>>, completed: Arc<AtomicUsize>) {
    for i in 0..RANGE_PER_PRODUCER {
        queue.push(Box::new(i + id * RANGE_PER_PRODUCER));
    }

    if completed.fetch_add(1, Ordering::SeqCst) + 1 == PRODUCERS {
        queue.set_finished();
    }
}

// -----------------------------------------------------------------------------
// 		- Consumer -
// 		Pop until the queue is finished and empty
// -----------------------------------------------------------------------------
fn consumer(queue: Arc<Queue<Box<usize>>>) -> Vec<usize> {
    queue.iter().map(|val| *val).collect()
}

fn main() -> Result<()> {
    // Usage: producer_consumer [unbounded|<capacity>]
    let capacity = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => Capacity::Unbounded,
    };

    let queue = Arc::new(Queue::with_capacity(capacity)?);
    let completed = Arc::new(AtomicUsize::new(0));

    let producers = (0..PRODUCERS).map(|id| {
        let queue = queue.clone();
        let completed = completed.clone();
        thread::spawn(move || producer(id, queue, completed))
    }).collect::<Vec<_>>();

    let consumers = (0..CONSUMERS).map(|_| {
        let queue = queue.clone();
        thread::spawn(move || consumer(queue))
    }).collect::<Vec<_>>();

    for handle in producers {
        if handle.join().is_err() {
            // A panicked producer never counts as completed,
            // finish here so the consumers can drain and return
            eprintln!("producer panicked, finishing the queue");
            queue.set_finished();
        }
    }

    let mut out = Vec::new();
    for handle in consumers {
        if let Ok(values) = handle.join() {
            out.extend(values);
        }
    }
    out.sort();

    let all_caught = out.into_iter().eq(0..PRODUCERS * RANGE_PER_PRODUCER);
    println!(
        "Consumers caught all the production from producers ({} queue)? {}",
        capacity,
        if all_caught { "Yes" } else { "No" }
    );

    Ok(())
}
