use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::seq::SliceRandom;
use syncq::Queue;

// -----------------------------------------------------------------------------
// 		- Push shuffled values from `producers` threads, pop them from
// 		`consumers` threads and return everything that was popped.
// 		The last producer to finish marks the queue as finished.
// -----------------------------------------------------------------------------
fn run(queue: &Queue<usize>, values: &[usize], producers: usize, consumers: usize) -> Vec<usize> {
    let completed = AtomicUsize::new(0);
    let mut collections = vec![Vec::new(); consumers];

    crossbeam::scope(|s| {
        for i in 0..producers {
            let chunk = &values[i * values.len() / producers..(i + 1) * values.len() / producers];
            let completed = &completed;
            s.spawn(move |_| {
                for val in chunk {
                    queue.push(*val);
                }
                if completed.fetch_add(1, Ordering::SeqCst) + 1 == producers {
                    queue.set_finished();
                }
            });
        }

        for collection in collections.iter_mut() {
            s.spawn(move |_| {
                while let Some(val) = queue.pop() {
                    collection.push(val);
                }
            });
        }
    })
    .unwrap();

    let mut out: Vec<usize> = collections.into_iter().flatten().collect();
    out.sort();
    out
}

fn shuffled(size: usize) -> Vec<usize> {
    let mut values: Vec<usize> = (0..size).collect();
    values.shuffle(&mut rand::thread_rng());
    values
}

#[test]
fn test_bounded_parallel() {
    let values = shuffled(1000);
    let queue = Queue::bounded(1000);
    let out = run(&queue, &values, 3, 2);
    assert_eq!(out, (0..1000).collect::<Vec<_>>());
}

#[test]
fn test_unbounded_parallel() {
    let values = shuffled(1000);
    let queue = Queue::unbounded();
    let out = run(&queue, &values, 3, 2);
    assert_eq!(out, (0..1000).collect::<Vec<_>>());
}

#[test]
fn test_small_bounded_many_threads() {
    let values = shuffled(100_000);
    let queue = Queue::bounded(20);
    let out = run(&queue, &values, 10, 10);
    assert_eq!(out, (0..100_000).collect::<Vec<_>>());
}

#[test]
fn test_capacity_one() {
    let values = shuffled(10_000);
    let queue = Queue::bounded(1);
    let out = run(&queue, &values, 4, 4);
    assert_eq!(out, (0..10_000).collect::<Vec<_>>());
}

#[test]
fn test_five_producers_five_consumers_repeated() {
    for _ in 0..20 {
        let values = shuffled(5 * 10_000);
        let queue = Queue::unbounded();
        let out = run(&queue, &values, 5, 5);
        assert_eq!(out.len(), 50_000);
        assert_eq!(out, (0..50_000).collect::<Vec<_>>());
    }
}

#[test]
fn test_capacity_never_exceeded() {
    let capacity = 8;
    let queue = Queue::bounded(capacity);
    let done = AtomicBool::new(false);
    let max_seen = AtomicUsize::new(0);

    crossbeam::scope(|s| {
        let queue = &queue;
        let done = &done;
        let max_seen = &max_seen;

        s.spawn(move |_| {
            while !done.load(Ordering::SeqCst) {
                let len = queue.len();
                max_seen.fetch_max(len, Ordering::SeqCst);
            }
        });

        let producers = (0..4).map(|p| {
            s.spawn(move |_| {
                for i in 0..5_000 {
                    queue.push(p * 5_000 + i);
                }
            })
        }).collect::<Vec<_>>();

        let consumers = (0..2).map(|_| {
            s.spawn(move |_| queue.iter().count())
        }).collect::<Vec<_>>();

        for producer in producers {
            producer.join().unwrap();
        }
        queue.set_finished();

        let popped: usize = consumers.into_iter().map(|c| c.join().unwrap()).sum();
        done.store(true, Ordering::SeqCst);
        assert_eq!(popped, 20_000);
    })
    .unwrap();

    assert!(max_seen.load(Ordering::SeqCst) <= capacity);
}

#[test]
fn test_finish_releases_every_waiter() {
    let queue = Queue::<u8>::bounded(1);
    queue.push(0);

    crossbeam::scope(|s| {
        let queue = &queue;
        // Blocked on a full queue
        let producers = (0..3).map(|i| s.spawn(move |_| queue.push(i))).collect::<Vec<_>>();

        std::thread::sleep(std::time::Duration::from_millis(20));
        queue.set_finished();

        for producer in producers {
            producer.join().unwrap();
        }
    })
    .unwrap();

    assert_eq!(queue.pop(), Some(0));
    assert_eq!(queue.pop(), None);

    let queue = Queue::<u8>::unbounded();
    crossbeam::scope(|s| {
        let queue = &queue;
        // Blocked on an empty queue
        let consumers = (0..3).map(|_| s.spawn(move |_| queue.pop())).collect::<Vec<_>>();

        std::thread::sleep(std::time::Duration::from_millis(20));
        queue.set_finished();

        for consumer in consumers {
            assert_eq!(consumer.join().unwrap(), None);
        }
    })
    .unwrap();
}
