//! The `maybe_pipe!` macro for short-circuiting left-to-right pipelines.

/// Pipes a possibly absent value through a series of steps, left to right.
///
/// Every step receives the unwrapped value of the previous stage and
/// returns a [`Maybe`](crate::Maybe). As soon as a stage is absent the
/// remaining steps are skipped and the whole pipeline is absent.
///
/// Each step is statically typed `FnOnce(A) -> Maybe<B>` with its own `A`
/// and `B`, for any number of steps.
///
/// # Syntax
///
/// - `maybe_pipe!(m)` - Returns `m` unchanged
/// - `maybe_pipe!(m, f)` - Returns `f(v)` if `m` is `Some(v)`, else `None`
/// - `maybe_pipe!(m, f, g, ...)` - Feeds each present result into the next step
///
/// # Plain transforms and absence
///
/// A step that returns `None` is how a pipeline stops early. Transforms
/// that always produce a value should be wrapped with
/// [`maybe_op_map`](crate::maybe_op_map) and predicates with
/// [`maybe_op_filter`](crate::maybe_op_filter).
///
/// # Examples
///
/// ```
/// use maybe_combinators::{maybe_op_filter, maybe_op_map, maybe_pipe};
///
/// struct Inner { y: i32 }
/// struct Outer { x: Inner }
///
/// let value = Some(Outer { x: Inner { y: 69 } });
///
/// let result = maybe_pipe!(
///     value,
///     maybe_op_map(|outer: Outer| outer.x),
///     maybe_op_filter(|inner: &Inner| inner.y != 32),
///     maybe_op_map(|inner: Inner| inner.y),
/// );
/// assert_eq!(result, Some(69));
/// ```
///
/// A step returning `None` ends the pipeline:
///
/// ```
/// use maybe_combinators::maybe_pipe;
///
/// let calls = std::cell::Cell::new(0);
/// let result = maybe_pipe!(
///     Some(89),
///     |value| if value > 100 { Some(value) } else { None },
///     |value: i32| {
///         calls.set(calls.get() + 1);
///         Some(value * 2)
///     },
/// );
/// assert_eq!(result, None);
/// assert_eq!(calls.get(), 0);
/// ```
#[macro_export]
macro_rules! maybe_pipe {
    // Value only: return as is
    ($maybe:expr $(,)?) => {
        $maybe
    };

    // Single step: apply it if present
    ($maybe:expr, $step:expr $(,)?) => {
        ::core::option::Option::and_then($maybe, $step)
    };

    // Multiple steps: apply left to right recursively
    ($maybe:expr, $step:expr, $($remaining_steps:expr),+ $(,)?) => {
        $crate::maybe_pipe!(::core::option::Option::and_then($maybe, $step), $($remaining_steps),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_maybe_pipe_value_only() {
        let result: Option<i32> = maybe_pipe!(Some(42));
        assert_eq!(result, Some(42));
    }

    #[test]
    fn test_maybe_pipe_single() {
        let result = maybe_pipe!(Some(5), |value: i32| Some(value * 2));
        assert_eq!(result, Some(10));
    }

    #[test]
    fn test_maybe_pipe_absent_input() {
        let result = maybe_pipe!(None::<i32>, |value: i32| Some(value * 2));
        assert_eq!(result, None);
    }

    #[test]
    fn test_maybe_pipe_type_changes() {
        let result = maybe_pipe!(
            Some("12345"),
            |text: &str| text.parse::<i32>().ok(),
            |number: i32| Some(number.to_string()),
            |text: String| Some(text.len()),
        );
        assert_eq!(result, Some(5));
    }
}
