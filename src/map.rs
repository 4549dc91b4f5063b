//! Single-value combinators.
//!
//! - [`maybe_map`]: transform a present value, keep absence
//! - [`maybe_map_or_else`]: transform a present value or produce a fallback
//! - [`maybe_first`]: transform the first present value of a sequence
//! - [`maybe_first_in`]: like `maybe_first`, for a sequence that may itself be absent
//!
//! None of these functions catch anything: if a callback panics the panic
//! leaves the combinator untouched.

use crate::predicate::Maybe;

/// Applies `function` to the value if it is present.
///
/// The result is always present when the input was; `function` returns a
/// plain `V`. When the input is absent `function` is never called.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::maybe_map;
///
/// assert_eq!(maybe_map(Some(1), |value| value << 10), Some(1024));
/// assert_eq!(maybe_map(None::<i32>, |value| value << 10), None);
/// ```
#[inline]
pub fn maybe_map<T, V, F>(maybe: Maybe<T>, function: F) -> Maybe<V>
where
    F: FnOnce(T) -> V,
{
    maybe.map(function)
}

/// Applies `function` to a present value, or calls `fallback` when absent.
///
/// Exactly one of the two callbacks runs per call.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::maybe_map_or_else;
///
/// assert_eq!(maybe_map_or_else(Some(2), |value| value * 22, || 42), 44);
/// assert_eq!(maybe_map_or_else(None, |value: i32| value * 22, || 42), 42);
/// ```
#[inline]
pub fn maybe_map_or_else<T, V, F, G>(maybe: Maybe<T>, function: F, fallback: G) -> V
where
    F: FnOnce(T) -> V,
    G: FnOnce() -> V,
{
    maybe.map_or_else(fallback, function)
}

/// Applies `function` to the first present element of `maybes`.
///
/// Elements are inspected in order and the scan stops at the first present
/// one; later elements are never pulled from the iterator. `function` runs
/// at most once. An empty sequence, or one where every element is absent,
/// yields `None`.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::maybe_first;
///
/// assert_eq!(maybe_first([None, None, Some(1)], |value| value + 1), Some(2));
/// assert_eq!(maybe_first([None::<i32>, None], |value| value + 1), None);
/// assert_eq!(maybe_first(Vec::<Option<i32>>::new(), |value| value), None);
/// ```
pub fn maybe_first<I, T, V, F>(maybes: I, function: F) -> Maybe<V>
where
    I: IntoIterator<Item = Maybe<T>>,
    F: FnOnce(T) -> V,
{
    maybes.into_iter().flatten().next().map(function)
}

/// Like [`maybe_first`], but the sequence itself may be absent.
///
/// An absent sequence behaves exactly like an empty one.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::maybe_first_in;
///
/// let missing: Option<Vec<Option<i32>>> = None;
/// assert_eq!(maybe_first_in(missing, |value| value), None);
/// assert_eq!(maybe_first_in(Some(vec![None, Some(3)]), |value| value * 2), Some(6));
/// ```
pub fn maybe_first_in<I, T, V, F>(maybes: Maybe<I>, function: F) -> Maybe<V>
where
    I: IntoIterator<Item = Maybe<T>>,
    F: FnOnce(T) -> V,
{
    maybe_first(maybes.into_iter().flatten(), function)
}
