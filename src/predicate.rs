//! Presence predicate - classifying a value as absent or present.
//!
//! Every other combinator in this crate is built on the single question
//! answered here: does this value carry something, or is it the absence
//! marker?
//!
//! The crate represents a possibly absent value as [`Maybe<T>`], an alias
//! of [`Option<T>`]. `None` is the only absence marker a `Maybe` can hold,
//! so two absent values always compare equal no matter which combinators
//! produced them.
//!
//! Rust has more than one way to spell "nothing" however. The [`Nullable`]
//! trait collects all of them under one predicate:
//!
//! - `Option<T>`: `None`
//! - `*const T` / `*mut T`: the null pointer
//! - `&N` / `&mut N` / `Box<N>` for any `N: Nullable`: whatever `N` says
//!
//! # Examples
//!
//! ```rust
//! use maybe_combinators::{is_maybe, Maybe};
//!
//! let absent: Maybe<i32> = None;
//! assert!(is_maybe(&absent));
//!
//! // Falsy-looking values are still present
//! assert!(!is_maybe(&Some(0)));
//! assert!(!is_maybe(&Some("")));
//! assert!(!is_maybe(&Some(false)));
//!
//! // A null pointer is another spelling of absence
//! assert!(is_maybe(&std::ptr::null::<u8>()));
//! ```

/// Either a value of type `T` or absent.
///
/// `Some(value)` is the present variant and `None` the absent one.
/// The contents of a present value are never inspected: `Some(0)`,
/// `Some("")`, `Some(Vec::new())` and `Some(false)` are all present.
pub type Maybe<T> = Option<T>;

/// Types that have an absence marker.
///
/// Implementations must be pure: calling [`is_absent`](Nullable::is_absent)
/// any number of times on the same value yields the same answer and has
/// no observable effect.
pub trait Nullable {
    /// Returns `true` if this value is the absence marker.
    fn is_absent(&self) -> bool;

    /// Returns `true` if this value is not the absence marker.
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_absent()
    }
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<N: Nullable + ?Sized> Nullable for &N {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<N: Nullable + ?Sized> Nullable for &mut N {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<N: Nullable + ?Sized> Nullable for Box<N> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

/// Returns `true` if `value` is absent.
///
/// Total and side-effect free; it never looks inside a present value.
///
/// # Examples
///
/// ```rust
/// use maybe_combinators::is_maybe;
///
/// assert!(is_maybe(&None::<i32>));
/// assert!(!is_maybe(&Some(Vec::<i32>::new())));
/// ```
#[inline]
pub fn is_maybe<N: Nullable + ?Sized>(value: &N) -> bool {
    value.is_absent()
}

// `None` occupies the null niche of a reference, so wrapping never costs space.
static_assertions::assert_eq_size!(Maybe<&u8>, &u8);
static_assertions::assert_eq_size!(Maybe<Box<u64>>, Box<u64>);
