//! Sequential invocation of a callback over an integer range.

use tracing::trace;

/// Invoke `consumer` once per integer in `[lower, upper)`, in ascending
/// order.
///
/// If `upper <= lower` the range is empty and nothing is invoked. A `None`
/// consumer makes the whole call a no-op; neither case is an error.
///
/// # Example
/// ```
/// let mut seen = Vec::new();
/// repeatkit::invoke_range(-2, 3, Some(|i| seen.push(i)));
/// assert_eq!(seen, [-2, -1, 0, 1, 2]);
/// ```
pub fn invoke_range<F>(lower: i64, upper: i64, consumer: Option<F>)
where
    F: FnMut(i64),
{
    let Some(mut consumer) = consumer else {
        trace!(lower, upper, "no consumer supplied, skipping range");
        return;
    };
    for i in lower..upper {
        consumer(i);
    }
}

/// Invoke `consumer` once per integer in `[0, upper)`.
///
/// Shorthand for [`invoke_range`] with a lower bound of 0; `upper` is also
/// the number of invocations when positive.
///
/// # Example
/// ```
/// let mut seen = Vec::new();
/// repeatkit::invoke_range_to(5, Some(|i| seen.push(i)));
/// assert_eq!(seen, [0, 1, 2, 3, 4]);
/// ```
pub fn invoke_range_to<F>(upper: i64, consumer: Option<F>)
where
    F: FnMut(i64),
{
    invoke_range(0, upper, consumer);
}
