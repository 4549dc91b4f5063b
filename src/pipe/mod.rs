//! Short-circuiting pipelines over possibly absent values.
//!
//! A pipeline keeps a running value, starting with the input. Each step is
//! called with the unwrapped running value and returns the next
//! [`Maybe`]. Once the running value is absent no further step is invoked
//! and the pipeline result is absent.
//!
//! # Overview
//!
//! - [`maybe_pipe!`](crate::maybe_pipe!): any number of statically typed steps, each with
//!   its own input and output type
//! - [`maybe_pipe()`]: a runtime list of steps that all map `T` to `Maybe<T>`,
//!   for pipelines whose length is only known at runtime
//! - [`maybe_op_map`] / [`maybe_op_filter`]: adapters turning plain transforms
//!   and predicates into steps
//!
//! # Steps and absence
//!
//! A step states in its return type whether it can end the pipeline. A
//! step returning `None` is the only short-circuit signal; there is no
//! separate "plain" step whose `None` result would be an ordinary value.
//! Transforms that never fail are lifted with [`maybe_op_map`].
//!
//! # Examples
//!
//! ```
//! use maybe_combinators::{maybe_op_map, maybe_pipe};
//!
//! let steps: Vec<Box<dyn FnOnce(i32) -> Option<i32>>> = vec![
//!     Box::new(maybe_op_map(|value: i32| value + 1)),
//!     Box::new(|value: i32| value.checked_mul(1_000_000)),
//!     Box::new(maybe_op_map(|value: i32| value - 1)),
//! ];
//!
//! assert_eq!(maybe_pipe(Some(1), steps), Some(1_999_999));
//! ```

mod ops;
mod pipe_macro;

pub use ops::{
    OperatorMaybeFunction, maybe_op_filter, maybe_op_filter_lifted, maybe_op_map,
    maybe_op_map_lifted,
};

use crate::predicate::Maybe;

/// Runs `maybe` through a runtime sequence of steps.
///
/// Steps are pulled from `steps` one at a time. When the running value
/// becomes absent the function returns `None` immediately; the remaining
/// steps are neither called nor pulled from the iterator.
///
/// # Examples
///
/// ```
/// use maybe_combinators::maybe_pipe;
///
/// let halve = |value: u32| (value % 2 == 0).then_some(value / 2);
///
/// assert_eq!(maybe_pipe(Some(8), [halve, halve, halve]), Some(1));
/// assert_eq!(maybe_pipe(Some(8), [halve; 4]), None);
/// assert_eq!(maybe_pipe(None, [halve]), None);
/// ```
pub fn maybe_pipe<T, I, F>(maybe: Maybe<T>, steps: I) -> Maybe<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Maybe<T>,
{
    let mut steps = steps.into_iter();
    let mut current = maybe;
    while let Some(value) = current {
        match steps.next() {
            Some(step) => current = step(value),
            None => return Some(value),
        }
    }
    None
}
