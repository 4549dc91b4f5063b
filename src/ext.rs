//! Method-style access to the combinators.
//!
//! [`MaybeExt`] is implemented for [`Option`], so the free functions of this
//! crate can also be chained as methods. Each method has exactly the
//! contract of the function it is named after.
//!
//! # Examples
//!
//! ```rust
//! use maybe_combinators::MaybeExt;
//!
//! let width: Option<u32> = Some(3);
//! let area = width.maybe_map(|value| value * value);
//! assert_eq!(area, Some(9));
//!
//! let label = None::<u32>.maybe_map_or_else(|value| value.to_string(), || String::from("n/a"));
//! assert_eq!(label, "n/a");
//! ```

use crate::map::{maybe_map, maybe_map_or_else};
use crate::pipe::maybe_pipe;
use crate::predicate::{Maybe, Nullable};

/// Combinator methods on a possibly absent value.
pub trait MaybeExt<T>: Sized {
    /// Returns `true` if the value is absent. See [`is_maybe`](crate::is_maybe).
    fn is_maybe(&self) -> bool;

    /// See [`maybe_map`](crate::maybe_map).
    fn maybe_map<V, F>(self, function: F) -> Maybe<V>
    where
        F: FnOnce(T) -> V;

    /// See [`maybe_map_or_else`](crate::maybe_map_or_else).
    fn maybe_map_or_else<V, F, G>(self, function: F, fallback: G) -> V
    where
        F: FnOnce(T) -> V,
        G: FnOnce() -> V;

    /// Applies a single pipeline step, skipping it when absent.
    ///
    /// ```rust
    /// use maybe_combinators::{maybe_op_filter, MaybeExt};
    ///
    /// let even = Some(4).maybe_then(maybe_op_filter(|value: &i32| value % 2 == 0));
    /// assert_eq!(even, Some(4));
    /// ```
    fn maybe_then<V, F>(self, step: F) -> Maybe<V>
    where
        F: FnOnce(T) -> Maybe<V>;

    /// See [`maybe_pipe`](crate::maybe_pipe()).
    fn maybe_pipe<I, F>(self, steps: I) -> Maybe<T>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Maybe<T>;
}

impl<T> MaybeExt<T> for Option<T> {
    #[inline]
    fn is_maybe(&self) -> bool {
        self.is_absent()
    }

    #[inline]
    fn maybe_map<V, F>(self, function: F) -> Maybe<V>
    where
        F: FnOnce(T) -> V,
    {
        maybe_map(self, function)
    }

    #[inline]
    fn maybe_map_or_else<V, F, G>(self, function: F, fallback: G) -> V
    where
        F: FnOnce(T) -> V,
        G: FnOnce() -> V,
    {
        maybe_map_or_else(self, function, fallback)
    }

    #[inline]
    fn maybe_then<V, F>(self, step: F) -> Maybe<V>
    where
        F: FnOnce(T) -> Maybe<V>,
    {
        self.and_then(step)
    }

    #[inline]
    fn maybe_pipe<I, F>(self, steps: I) -> Maybe<T>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Maybe<T>,
    {
        maybe_pipe(self, steps)
    }
}
