//! # maybe-combinators
//!
//! Absence-safe value transformations: chain operations over values that
//! may be absent, without branching at every step.
//!
//! ## Overview
//!
//! A possibly absent value is a [`Maybe<T>`], which is an [`Option<T>`].
//! Every combinator short-circuits: once a value is absent, no caller
//! callback is invoked on it.
//!
//! - **Presence predicate**: [`is_maybe`], [`Nullable`]
//! - **Single-value combinators**: [`maybe_map`], [`maybe_map_or_else`], [`maybe_first`]
//! - **All-or-nothing**: [`maybe_map_all`] over tuples, arrays and `Vec`s
//! - **Pipelines**: [`maybe_pipe!`], [`maybe_pipe()`], with the adapters
//!   [`maybe_op_map`] and [`maybe_op_filter`]
//! - **Methods**: [`MaybeExt`] exposes the same combinators on `Option`
//!
//! Caller callbacks are never wrapped: a panic inside one propagates
//! straight out of the combinator that called it.
//!
//! ## Feature Flags
//!
//! - `all`: [`maybe_map_all`] and [`MaybeAll`]
//! - `pipe`: pipelines and operator adapters
//! - `ext`: the [`MaybeExt`] extension trait
//! - `full`: Enable all features
//!
//! The predicate and single-value combinators are always available.
//!
//! ## Example
//!
//! ```rust
//! use maybe_combinators::prelude::*;
//!
//! let port: Option<&str> = Some("8080");
//!
//! let parsed = maybe_pipe!(
//!     port,
//!     |text: &str| text.parse::<u16>().ok(),
//!     maybe_op_filter(|port: &u16| *port >= 1024),
//! );
//! assert_eq!(parsed, Some(8080));
//!
//! let address = maybe_map_all((Some("localhost"), parsed), |(host, port)| format!("{host}:{port}"));
//! assert_eq!(address.as_deref(), Some("localhost:8080"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every combinator, trait and macro.
///
/// # Usage
///
/// ```rust
/// use maybe_combinators::prelude::*;
/// ```
pub mod prelude {
    pub use crate::map::*;
    pub use crate::predicate::*;

    #[cfg(feature = "all")]
    pub use crate::all::*;

    #[cfg(feature = "pipe")]
    pub use crate::maybe_pipe;
    #[cfg(feature = "pipe")]
    pub use crate::pipe::*;

    #[cfg(feature = "ext")]
    pub use crate::ext::*;
}

pub mod map;
pub mod predicate;

#[cfg(feature = "all")]
pub mod all;

#[cfg(feature = "pipe")]
pub mod pipe;

#[cfg(feature = "ext")]
pub mod ext;

pub use map::{maybe_first, maybe_first_in, maybe_map, maybe_map_or_else};
pub use predicate::{Maybe, Nullable, is_maybe};

#[cfg(feature = "all")]
pub use all::{MaybeAll, maybe_map_all};

#[cfg(feature = "pipe")]
pub use pipe::{
    OperatorMaybeFunction, maybe_op_filter, maybe_op_filter_lifted, maybe_op_map,
    maybe_op_map_lifted, maybe_pipe,
};

#[cfg(feature = "ext")]
pub use ext::MaybeExt;
