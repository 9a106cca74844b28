use syncq::errors::Result;
use syncq::{Capacity, Queue};

fn walk_through(capacity: Capacity) -> Result<()> {
    let queue = Queue::with_capacity(capacity)?;
    println!("{} queue (bounded: {})", capacity, queue.is_bounded());

    queue.push(1);
    queue.push(2);
    queue.push(3);
    queue.set_finished();
    println!("  finished with {} values", queue.len());

    while let Some(val) = queue.pop() {
        println!("  popped {}, {} left", val, queue.len());
    }
    println!("  pop on a drained queue: {:?}", queue.pop());

    Ok(())
}

fn main() -> Result<()> {
    walk_through(Capacity::Unbounded)?;
    walk_through(Capacity::Bounded(10))?;
    Ok(())
}
