//! Fixed-length and unbounded repetition of a single value.

use std::iter::FusedIterator;

use crate::common::clamp_count;

/// Build a `Vec` of length `max(n, 0)` filled with clones of `value`.
///
/// A negative `n` yields an empty `Vec` rather than an error. To repeat a
/// shared reference instead of deep-cloning, pass an `Rc<T>` or `Arc<T>`;
/// cloning those preserves pointer identity.
///
/// # Example
/// ```
/// let threes = repeatkit::list_of(3, 4);
/// assert_eq!(threes, [3, 3, 3, 3]);
/// assert!(repeatkit::list_of("foo", -1).is_empty());
/// ```
#[must_use]
pub fn list_of<T: Clone>(value: T, n: i64) -> Vec<T> {
    vec![value; clamp_count(n)]
}

/// Create an infinite lazy iterator that yields clones of `value` forever.
///
/// Each element is produced on demand; the caller must bound the iterator
/// (e.g. with [`Iterator::take`]) before collecting it.
///
/// # Example
/// ```
/// let foos: Vec<_> = repeatkit::stream_of("foo").take(3).collect();
/// assert_eq!(foos, ["foo", "foo", "foo"]);
/// ```
pub fn stream_of<T: Clone>(value: T) -> Repeating<T> {
    Repeating { value }
}

/// Infinite iterator over clones of a single value.
///
/// Returned by [`stream_of`]. Never yields `None`.
#[derive(Debug, Clone)]
pub struct Repeating<T> {
    value: T,
}

impl<T: Clone> Iterator for Repeating<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Clone> FusedIterator for Repeating<T> {}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn list_of_fills_n_slots() {
        let list = list_of("foo", 5);
        assert_eq!(list.len(), 5);
        assert!(list.iter().all(|s| *s == "foo"));
    }

    #[test]
    fn list_of_zero_and_negative_are_empty() {
        assert!(list_of("foo", 0).is_empty());
        assert!(list_of("foo", -1).is_empty());
    }

    #[test]
    fn list_of_absent_payload_is_valid() {
        let list = list_of(None::<String>, 4);
        assert_eq!(list.len(), 4);
        assert!(list.iter().all(Option::is_none));
    }

    #[test]
    fn list_of_rc_shares_identity() {
        let value = Rc::new(42);
        let list = list_of(Rc::clone(&value), 3);
        assert!(list.iter().all(|item| Rc::ptr_eq(item, &value)));
    }

    #[test]
    fn stream_of_yields_the_value_forever() {
        let first = stream_of("foo").next();
        assert_eq!(first, Some("foo"));
        assert_eq!(stream_of("foo").take(200).filter(|f| *f == "foo").count(), 200);
    }

    #[test]
    fn stream_of_absent_payload() {
        let nones: Vec<_> = stream_of(None::<i32>).take(200).collect();
        assert_eq!(nones.len(), 200);
        assert!(nones.iter().all(Option::is_none));
    }

    #[test]
    fn stream_of_take_zero_is_empty() {
        assert_eq!(stream_of(1).take(0).count(), 0);
    }

    #[test]
    fn repeating_reports_unbounded() {
        assert_eq!(stream_of(1).size_hint(), (usize::MAX, None));
    }
}
