//! Operator adapters for pipeline steps.
//!
//! An adapter wraps a plain callback into the step shape used by
//! [`maybe_pipe!`](crate::maybe_pipe) and [`maybe_pipe`](crate::maybe_pipe()):
//! a function from an unwrapped value to a [`Maybe`].
//!
//! - [`maybe_op_map`]: always-present transform, `v -> Some(cb(v))`
//! - [`maybe_op_filter`]: keeps `v` when the predicate holds, otherwise ends the pipeline
//!
//! The `_lifted` variants take the possibly absent value itself and return
//! `None` without calling the callback when it is absent. They are the
//! same adapters for code that holds a `Maybe` rather than a pipeline stage.

use crate::predicate::Maybe;

/// The shape of a callback that is only ever called with a present value.
///
/// Blanket-implemented for every `FnOnce(T) -> V`.
pub trait OperatorMaybeFunction<T, V>: FnOnce(T) -> V {}

impl<T, V, F> OperatorMaybeFunction<T, V> for F where F: FnOnce(T) -> V {}

/// Wraps a plain transform into a pipeline step.
///
/// The returned step always produces a present value.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::maybe_op_map;
///
/// let mut double = maybe_op_map(|value: i32| value * 2);
/// assert_eq!(double(21), Some(42));
///
/// let lengths: Vec<usize> = vec!["a", "bcd"].into_iter().filter_map(maybe_op_map(str::len)).collect();
/// assert_eq!(lengths, vec![1, 3]);
/// ```
#[inline]
pub fn maybe_op_map<T, V, F>(mut function: F) -> impl FnMut(T) -> Maybe<V>
where
    F: FnMut(T) -> V,
{
    move |value| Some(function(value))
}

/// Wraps a predicate into a pipeline step that ends the pipeline when it fails.
///
/// The returned step gives the value back unchanged when `predicate` holds
/// and `None` otherwise.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::maybe_op_filter;
///
/// let mut not_ten = maybe_op_filter(|value: &i32| *value != 10);
/// assert_eq!(not_ten(3), Some(3));
/// assert_eq!(not_ten(10), None);
/// ```
#[inline]
pub fn maybe_op_filter<T, P>(mut predicate: P) -> impl FnMut(T) -> Maybe<T>
where
    P: FnMut(&T) -> bool,
{
    move |value| if predicate(&value) { Some(value) } else { None }
}

/// [`maybe_op_map`] over a possibly absent input.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::maybe_op_map_lifted;
///
/// let mut double = maybe_op_map_lifted(|value: i32| value * 2);
/// assert_eq!(double(Some(21)), Some(42));
/// assert_eq!(double(None), None);
/// ```
#[inline]
pub fn maybe_op_map_lifted<T, V, F>(function: F) -> impl FnMut(Maybe<T>) -> Maybe<V>
where
    F: FnMut(T) -> V,
{
    let mut step = maybe_op_map(function);
    move |maybe| maybe.and_then(&mut step)
}

/// [`maybe_op_filter`] over a possibly absent input.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::maybe_op_filter_lifted;
///
/// let mut positive = maybe_op_filter_lifted(|value: &i32| *value > 0);
/// assert_eq!(positive(Some(3)), Some(3));
/// assert_eq!(positive(Some(-3)), None);
/// assert_eq!(positive(None), None);
/// ```
#[inline]
pub fn maybe_op_filter_lifted<T, P>(predicate: P) -> impl FnMut(Maybe<T>) -> Maybe<T>
where
    P: FnMut(&T) -> bool,
{
    let mut step = maybe_op_filter(predicate);
    move |maybe| maybe.and_then(&mut step)
}
