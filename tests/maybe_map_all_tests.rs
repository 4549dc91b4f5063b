//! Unit tests for all-or-nothing mapping.
//!
//! `maybe_map_all` calls its callback with every unwrapped value only when
//! none of the inputs is absent. Tuples, arrays and `Vec`s must agree on
//! this for every size.

#![cfg(feature = "all")]

use maybe_combinators::{Maybe, MaybeAll, maybe_map_all};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Basic Behavior
// =============================================================================

#[rstest]
fn test_maybe_map_all_absent_first_element() {
    let calls = Cell::new(0);
    let result = maybe_map_all(vec![None, Some(1), Some(2), Some(3), Some(4)], |values| {
        calls.set(calls.get() + 1);
        values
    });
    assert_eq!(result, None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_maybe_map_all_returns_all_values() {
    let result = maybe_map_all(vec![Some(0), Some(1), Some(2), Some(3), Some(4)], |values| values);
    assert_eq!(result, Some(vec![0, 1, 2, 3, 4]));
}

#[rstest]
#[case([None, Some(2), Some(3)])]
#[case([Some(1), None, Some(3)])]
#[case([Some(1), Some(2), None])]
#[case([None, None, None])]
fn test_maybe_map_all_any_position_absent(#[case] maybes: [Maybe<i32>; 3]) {
    let calls = Cell::new(0);
    let result = maybe_map_all(maybes, |values| {
        calls.set(calls.get() + 1);
        values
    });
    assert_eq!(result, None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_maybe_map_all_heterogeneous_tuple() {
    let result = maybe_map_all((Some(3_u8), Some("x"), Some(true)), |(count, text, upper)| {
        let repeated = text.repeat(usize::from(count));
        if upper { repeated.to_uppercase() } else { repeated }
    });
    assert_eq!(result, Some(String::from("XXX")));
}

#[rstest]
fn test_maybe_map_all_absent_collection() {
    let missing: Option<Vec<Option<i32>>> = None;
    assert_eq!(maybe_map_all(missing, |values| values.len()), None);
}

#[rstest]
fn test_maybe_map_all_empty_vec_is_present() {
    let result = maybe_map_all(Vec::<Maybe<i32>>::new(), |values| values.len());
    assert_eq!(result, Some(0));
}

#[rstest]
fn test_all_present_without_callback() {
    assert_eq!((Some(1), Some('a')).all_present(), Some((1, 'a')));
    assert_eq!((Some(1), None::<char>).all_present(), None);
}

// =============================================================================
// Tuple / Array / Vec Agreement
// =============================================================================

fn counted<A>(calls: &Cell<usize>) -> impl FnOnce(A) + '_ {
    move |_| calls.set(calls.get() + 1)
}

macro_rules! arity_agreement {
    ($arity:literal => $($index:tt),+) => {
        paste::paste! {
            #[rstest]
            fn [<test_agreement_for_arity_ $arity>]() {
                let values: [i32; $arity] =
                    std::array::from_fn(|index| i32::try_from(index * 10).unwrap_or_default());

                let from_tuple = maybe_map_all(($(Some(values[$index]),)+), |unwrapped| {
                    vec![$(unwrapped.$index),+]
                });
                let from_array = maybe_map_all(values.map(Some), |unwrapped| unwrapped.to_vec());
                let from_vec = maybe_map_all(
                    values.iter().copied().map(Some).collect::<Vec<_>>(),
                    |unwrapped| unwrapped,
                );
                assert_eq!(from_tuple, Some(values.to_vec()));
                assert_eq!(from_array, from_tuple);
                assert_eq!(from_vec, from_tuple);

                for hole in 0..$arity {
                    let pick = |index: usize| (index != hole).then_some(values[index]);
                    let calls = Cell::new(0);

                    let from_tuple = maybe_map_all(($(pick($index),)+), counted(&calls));
                    let from_array = maybe_map_all([$(pick($index)),+], counted(&calls));
                    let from_vec = maybe_map_all(vec![$(pick($index)),+], counted(&calls));

                    assert_eq!(from_tuple, None);
                    assert_eq!(from_array, None);
                    assert_eq!(from_vec, None);
                    assert_eq!(calls.get(), 0);
                }
            }
        }
    };
}

arity_agreement!(1 => 0);
arity_agreement!(2 => 0, 1);
arity_agreement!(3 => 0, 1, 2);
arity_agreement!(4 => 0, 1, 2, 3);
arity_agreement!(5 => 0, 1, 2, 3, 4);
arity_agreement!(6 => 0, 1, 2, 3, 4, 5);
arity_agreement!(7 => 0, 1, 2, 3, 4, 5, 6);
arity_agreement!(8 => 0, 1, 2, 3, 4, 5, 6, 7);
arity_agreement!(9 => 0, 1, 2, 3, 4, 5, 6, 7, 8);
arity_agreement!(10 => 0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
