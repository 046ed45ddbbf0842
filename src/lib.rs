//! # repeatkit
//!
//! Small building blocks for repeating things: fill a `Vec` with one value,
//! stream a value forever, walk a callback over an integer range, or drive a
//! value-producing callback a bounded number of times while collecting,
//! piping, or discarding the results.
//!
//! Two policies run through the whole API:
//!
//! - **Counts clamp.** A negative count means zero repetitions, never an
//!   error.
//! - **Absent callbacks no-op.** Every callback parameter is an `Option`;
//!   passing `None` silently skips the work (yielding an empty result where
//!   one exists). That is distinct from repeating an absent *value*, which
//!   is just `T = Option<U>` and perfectly valid.
//!
//! # Example
//! ```
//! let mut count = 0;
//! let ids = repeatkit::get_n(3, Some(|| { count += 1; count }));
//! assert_eq!(ids, [1, 2, 3]);
//!
//! assert_eq!(repeatkit::list_of("x", 2), ["x", "x"]);
//! assert!(repeatkit::get_n::<i32, fn() -> i32>(3, None).is_empty());
//! ```

pub(crate) mod common;
pub mod fill;
pub mod range;
pub mod supply;

// Re-exports
pub use fill::{list_of, stream_of, Repeating};
pub use range::{invoke_range, invoke_range_to};
pub use supply::{get_n, pipe_n, toss_n};
