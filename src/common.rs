//! Shared count handling.

use tracing::trace;

/// Clamp a requested count to a usable length.
///
/// Negative counts are valid input and mean "zero repetitions", never an
/// error. Saturates at `usize::MAX` on targets where `usize` is narrower
/// than `i64`.
pub(crate) fn clamp_count(n: i64) -> usize {
    if n < 0 {
        trace!(n, "negative count clamped to zero");
        return 0;
    }
    usize::try_from(n).unwrap_or(usize::MAX)
}
