//! All-or-nothing mapping over several possibly absent values.
//!
//! [`maybe_map_all`] hands every unwrapped value to a callback, but only
//! if none of them is absent. A single absent element anywhere makes the
//! whole call absent and the callback is never invoked.
//!
//! The collections accepted are described by the [`MaybeAll`] trait:
//!
//! - tuples `(Maybe<S1>,)` up to `(Maybe<S1>, ..., Maybe<S10>)`, which keep
//!   a distinct type per position
//! - arrays `[Maybe<T>; N]` of any length
//! - `Vec<Maybe<T>>` for sequences whose length is only known at runtime
//! - `Maybe<M>` for any of the above, where an absent collection is absent
//!
//! All of them scan positionally front to back and stop at the first
//! absent element.
//!
//! # Examples
//!
//! ```rust
//! use maybe_combinators::maybe_map_all;
//!
//! #[derive(Debug, PartialEq)]
//! struct Circle {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let first = Some(Circle { x: 10, y: 2 });
//! let second = Some(Circle { x: 20, y: 69 });
//!
//! let distance = maybe_map_all((first, second), |(a, b)| (b.x - a.x) + (b.y - a.y));
//! assert_eq!(distance, Some(77));
//!
//! let missing: Option<Circle> = None;
//! let distance = maybe_map_all((Some(Circle { x: 0, y: 0 }), missing), |(a, b)| a.x + b.x);
//! assert_eq!(distance, None);
//! ```

use crate::predicate::Maybe;

/// A fixed or variable-size collection of possibly absent values.
///
/// [`all_present`](MaybeAll::all_present) unwraps every element when all
/// of them are present and returns `None` otherwise.
///
/// Implementations must stop at the first absent element in positional
/// order.
pub trait MaybeAll {
    /// The collection of unwrapped values.
    type Values;

    /// Unwraps every element, or returns `None` if any element is absent.
    fn all_present(self) -> Maybe<Self::Values>;
}

macro_rules! impl_maybe_all_for_tuple {
    ($($value:ident : $type_parameter:ident),+) => {
        impl<$($type_parameter),+> MaybeAll for ($(Maybe<$type_parameter>,)+) {
            type Values = ($($type_parameter,)+);

            #[inline]
            fn all_present(self) -> Maybe<Self::Values> {
                let ($($value,)+) = self;
                Some(($($value?,)+))
            }
        }
    };
}

impl_maybe_all_for_tuple!(s1: S1);
impl_maybe_all_for_tuple!(s1: S1, s2: S2);
impl_maybe_all_for_tuple!(s1: S1, s2: S2, s3: S3);
impl_maybe_all_for_tuple!(s1: S1, s2: S2, s3: S3, s4: S4);
impl_maybe_all_for_tuple!(s1: S1, s2: S2, s3: S3, s4: S4, s5: S5);
impl_maybe_all_for_tuple!(s1: S1, s2: S2, s3: S3, s4: S4, s5: S5, s6: S6);
impl_maybe_all_for_tuple!(s1: S1, s2: S2, s3: S3, s4: S4, s5: S5, s6: S6, s7: S7);
impl_maybe_all_for_tuple!(s1: S1, s2: S2, s3: S3, s4: S4, s5: S5, s6: S6, s7: S7, s8: S8);
impl_maybe_all_for_tuple!(s1: S1, s2: S2, s3: S3, s4: S4, s5: S5, s6: S6, s7: S7, s8: S8, s9: S9);
impl_maybe_all_for_tuple!(
    s1: S1, s2: S2, s3: S3, s4: S4, s5: S5, s6: S6, s7: S7, s8: S8, s9: S9, s10: S10
);

impl<T, const N: usize> MaybeAll for [Maybe<T>; N] {
    type Values = [T; N];

    fn all_present(self) -> Maybe<Self::Values> {
        if self.iter().any(Option::is_none) {
            return None;
        }
        // Every slot was checked above, so `flatten` yields exactly N values.
        let values: Vec<T> = self.into_iter().flatten().collect();
        values.try_into().ok()
    }
}

impl<T> MaybeAll for Vec<Maybe<T>> {
    type Values = Vec<T>;

    #[inline]
    fn all_present(self) -> Maybe<Self::Values> {
        self.into_iter().collect()
    }
}

impl<M: MaybeAll> MaybeAll for Maybe<M> {
    type Values = M::Values;

    #[inline]
    fn all_present(self) -> Maybe<Self::Values> {
        self.and_then(MaybeAll::all_present)
    }
}

/// Calls `function` with every unwrapped value if all of `maybes` are present.
///
/// Returns `None` without calling `function` as soon as one element is
/// absent, regardless of its position.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::maybe_map_all;
///
/// assert_eq!(maybe_map_all([None, Some(1), Some(2)], |values| values), None);
/// assert_eq!(
///     maybe_map_all(vec![Some(0), Some(1), Some(2)], |values| values.iter().sum::<i32>()),
///     Some(3),
/// );
/// assert_eq!(
///     maybe_map_all((Some(2), Some("ab")), |(count, text)| text.repeat(count)),
///     Some(String::from("abab")),
/// );
/// ```
///
/// Each tuple position keeps its own type, so the callback must accept
/// exactly the unwrapped shape:
///
/// ```compile_fail
/// use maybe_combinators::maybe_map_all;
///
/// let _ = maybe_map_all((Some(1), Some("a")), |(a, b): (i32, i32)| a + b);
/// ```
#[inline]
pub fn maybe_map_all<M, V, F>(maybes: M, function: F) -> Maybe<V>
where
    M: MaybeAll,
    F: FnOnce(M::Values) -> V,
{
    maybes.all_present().map(function)
}
