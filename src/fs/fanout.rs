//! Bounded fan-out for independent file reads.

use std::thread;

use crate::models::constants::MAX_CONCURRENT_READS;

/// Apply `read` to every item, at most [`MAX_CONCURRENT_READS`] at a time.
///
/// Each batch is joined before the next starts. Results keep input order.
pub fn read_batched<T, R, F>(items: &[T], read: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    read_in_batches(items, MAX_CONCURRENT_READS, read)
}

pub(crate) fn read_in_batches<T, R, F>(items: &[T], batch_size: usize, read: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let mut results = Vec::with_capacity(items.len());
    let read = &read;

    for batch in items.chunks(batch_size.max(1)) {
        thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .map(|item| scope.spawn(move || read(item)))
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(result) => results.push(result),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
        });
    }

    results
}

/// Run two independent reads concurrently and return both results.
pub fn join2<A, B, FA, FB>(a: FA, b: FB) -> (A, B)
where
    A: Send,
    B: Send,
    FA: FnOnce() -> A + Send,
    FB: FnOnce() -> B + Send,
{
    thread::scope(|scope| {
        let handle = scope.spawn(b);
        let a = a();
        match handle.join() {
            Ok(b) => (a, b),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })
}
