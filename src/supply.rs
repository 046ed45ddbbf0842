//! Bounded invocation of a value-producing callback.
//!
//! All three operations here share [`BoundedProducer`], a lazy iterator that
//! performs exactly one producer invocation per demanded element. Laziness is
//! what keeps the `get_n`/`pipe_n`/`toss_n` contracts aligned: the producer
//! runs at most once per element, in order, and never runs at all when the
//! bound is zero or the producer is absent.

use std::iter::FusedIterator;

use tracing::trace;

use crate::common::clamp_count;

/// Invoke `producer` exactly `max(n, 0)` times, discarding every result.
///
/// Invocations run sequentially on the caller's thread and finish before the
/// call returns; only the producer's side effects remain observable. A `None`
/// producer is a no-op.
///
/// # Example
/// ```
/// let mut popped = vec![1, 2, 3, 4];
/// repeatkit::toss_n(2, Some(|| popped.pop()));
/// assert_eq!(popped, [1, 2]);
/// ```
pub fn toss_n<T, P>(n: i64, producer: Option<P>)
where
    P: FnMut() -> T,
{
    BoundedProducer::new(n, producer).for_each(drop);
}

/// Invoke `producer` exactly `max(n, 0)` times, collecting the results in
/// invocation order.
///
/// A `None` producer or a non-positive `n` yields an empty `Vec` with zero
/// invocations.
///
/// # Example
/// ```
/// let mut count = 0;
/// let firsts = repeatkit::get_n(5, Some(|| { count += 1; count }));
/// assert_eq!(firsts, [1, 2, 3, 4, 5]);
/// ```
#[must_use = "the collected results are the point; use toss_n to discard"]
pub fn get_n<T, P>(n: i64, producer: Option<P>) -> Vec<T>
where
    P: FnMut() -> T,
{
    BoundedProducer::new(n, producer).collect()
}

/// Invoke `producer` `max(n, 0)` times, handing each result to `consumer`
/// immediately.
///
/// Produce and consume alternate strictly: each value is consumed before the
/// next one is produced, with no intermediate buffer. That matters when the
/// producer drains a stateful source and the consumer must see each item
/// before the next drain. If either callback is `None`, neither is invoked.
///
/// # Example
/// ```
/// let mut queue = vec![3, 2, 1];
/// let mut seen = Vec::new();
/// repeatkit::pipe_n(2, Some(|| queue.pop()), Some(|v| seen.push(v)));
/// assert_eq!(seen, [Some(1), Some(2)]);
/// ```
pub fn pipe_n<T, P, C>(n: i64, producer: Option<P>, consumer: Option<C>)
where
    P: FnMut() -> T,
    C: FnMut(T),
{
    let Some(consumer) = consumer else {
        trace!(n, "no consumer supplied, skipping pipe");
        return;
    };
    BoundedProducer::new(n, producer).for_each(consumer);
}

/// Lazy iterator that drives an optional producer at most `max(n, 0)` times.
///
/// Each `next` performs exactly one producer invocation, so consuming `k`
/// elements invokes the producer exactly `k` times, in order. An absent
/// producer behaves as an empty iterator.
pub(crate) struct BoundedProducer<P> {
    producer: Option<P>,
    remaining: usize,
}

impl<P> BoundedProducer<P> {
    pub(crate) fn new(n: i64, producer: Option<P>) -> Self {
        let remaining = match producer {
            Some(_) => clamp_count(n),
            None => {
                trace!(n, "no producer supplied, empty sequence");
                0
            }
        };
        Self {
            producer,
            remaining,
        }
    }
}

impl<T, P> Iterator for BoundedProducer<P>
where
    P: FnMut() -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.producer.as_mut()?)())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, P> ExactSizeIterator for BoundedProducer<P> where P: FnMut() -> T {}

impl<T, P> FusedIterator for BoundedProducer<P> where P: FnMut() -> T {}
