//! Combinators for chaining [`Outcome`] values without manual branching.
//!
//! Each combinator is a plain function that returns a closure from one
//! `Outcome` to the next step's value, so a chain reads left to right through
//! [`Outcome::then`]:
//!
//! ```
//! use outcome_rail::Outcome;
//! use outcome_rail::combinators::{map, on_failure, on_success, success};
//!
//! fn is_valid_email(email: String) -> Outcome<String, String> {
//!     if email.contains('@') {
//!         Outcome::succeeded(email)
//!     } else {
//!         Outcome::failed(format!("{email} is not an email"))
//!     }
//! }
//!
//! let kept: Vec<String> = Outcome::<String, String>::succeeded("valid@host".into())
//!     .then(map(is_valid_email))
//!     .then(on_success(|email: String| email.to_uppercase()))
//!     .then(on_failure(|reason: String| format!("Rejected: {reason}")))
//!     .then(success())
//!     .collect();
//!
//! assert_eq!(kept, vec!["VALID@HOST".to_string()]);
//! ```
//!
//! # Railway behavior
//!
//! Once a chain holds a `Failed` value, every later success-path function
//! (`map`, `on_success`, `on_success_do`) is skipped and the failure flows to
//! the end, transformed only by failure-path combinators.
//!
//! The functions in this module accept any failure type. The [`typed`]
//! submodule offers the same design restricted to [`Reason`](crate::Reason)
//! failures.

use crate::types::{Outcome, Projection};

pub mod typed;

/// Replaces the success value with `f(value)`; failures pass through.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::combinators::on_success;
///
/// let next = Outcome::<i32, &str>::succeeded(4).then(on_success(|n: i32| n + 1));
/// assert_eq!(next, Outcome::Succeeded(5));
/// ```
#[inline]
pub fn on_success<S, S1, F, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S1, F>
where
    M: FnOnce(S) -> S1,
{
    move |outcome| outcome.either(|value| Outcome::Succeeded(f(value)), Outcome::Failed)
}

/// Replaces the failure payload with `f(value)`; successes pass through.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::combinators::on_failure;
///
/// let next = Outcome::<i32, &str>::failed("3 is not divisible by 2")
///     .then(on_failure(|m: &str| format!("Rejected: {m}")));
///
/// assert_eq!(next, Outcome::Failed("Rejected: 3 is not divisible by 2".to_string()));
/// ```
#[inline]
pub fn on_failure<S, F, F1, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, F1>
where
    M: FnOnce(F) -> F1,
{
    move |outcome| outcome.either(Outcome::Succeeded, |value| Outcome::Failed(f(value)))
}

/// Alias of [`on_failure`].
#[inline]
pub fn map_failure<S, F, F1, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, F1>
where
    M: FnOnce(F) -> F1,
{
    on_failure(f)
}

/// Chains a step that can itself fail.
///
/// On success the outcome returned by `f` becomes the new outcome, whichever
/// variant it is. On failure `f` is never called.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::combinators::map;
///
/// fn even(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 {
///         Outcome::succeeded(n)
///     } else {
///         Outcome::failed(format!("{n} is not divisible by 2"))
///     }
/// }
///
/// assert_eq!(Outcome::succeeded(2).then(map(even)), Outcome::Succeeded(2));
/// assert_eq!(
///     Outcome::succeeded(3).then(map(even)),
///     Outcome::Failed("3 is not divisible by 2".to_string())
/// );
/// ```
#[inline]
pub fn map<S, S1, F, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S1, F>
where
    M: FnOnce(S) -> Outcome<S1, F>,
{
    move |outcome| outcome.either(f, Outcome::Failed)
}

/// Alias of [`map`].
#[inline]
pub fn attempt<S, S1, F, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S1, F>
where
    M: FnOnce(S) -> Outcome<S1, F>,
{
    map(f)
}

/// Runs `f` on the failure payload for its side effect.
///
/// The failure payload is kept: the outcome comes out exactly as it went in.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::combinators::on_failure_do;
///
/// let mut rejected = Vec::new();
/// let next = Outcome::<i32, &str>::failed("invalid_email")
///     .then(on_failure_do(|reason: &&str| rejected.push(reason.to_string())));
///
/// assert_eq!(next, Outcome::Failed("invalid_email"));
/// assert_eq!(rejected, vec!["invalid_email".to_string()]);
/// ```
#[inline]
pub fn on_failure_do<S, F, C>(f: C) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, F>
where
    C: FnOnce(&F),
{
    move |outcome| {
        outcome.either(Outcome::Succeeded, |value| {
            f(&value);
            Outcome::Failed(value)
        })
    }
}

/// Runs `first` then `second` on the success value; the outcome is unchanged.
///
/// Neither callback runs for a failed outcome.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use outcome_rail::Outcome;
/// use outcome_rail::combinators::on_success_do;
///
/// let seen = RefCell::new(Vec::new());
/// let next = Outcome::<i32, &str>::succeeded(7).then(on_success_do(
///     |n: &i32| seen.borrow_mut().push(format!("first {n}")),
///     |n: &i32| seen.borrow_mut().push(format!("second {n}")),
/// ));
///
/// assert_eq!(next, Outcome::Succeeded(7));
/// assert_eq!(seen.into_inner(), vec!["first 7", "second 7"]);
/// ```
#[inline]
pub fn on_success_do<S, F, C1, C2>(
    first: C1,
    second: C2,
) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, F>
where
    C1: FnOnce(&S),
    C2: FnOnce(&S),
{
    move |outcome| {
        outcome.either(
            |value| {
                first(&value);
                second(&value);
                Outcome::Succeeded(value)
            },
            Outcome::Failed,
        )
    }
}

/// Projects to the success value, running `f` on the failure payload first.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::combinators::peek_failure_and_do;
///
/// let mut rejected = Vec::new();
/// let kept: Vec<i32> = Outcome::<i32, &str>::failed("odd")
///     .then(peek_failure_and_do(|reason: &&str| rejected.push(reason.to_string())))
///     .collect();
///
/// assert!(kept.is_empty());
/// assert_eq!(rejected, vec!["odd".to_string()]);
/// ```
#[inline]
pub fn peek_failure_and_do<S, F, C>(f: C) -> impl FnOnce(Outcome<S, F>) -> Projection<S>
where
    C: FnOnce(&F),
{
    move |outcome| {
        outcome.either(Projection::single, |value| {
            f(&value);
            Projection::empty()
        })
    }
}

/// Like [`peek_failure_and_do`], running `first` then `second` on a failure.
#[inline]
pub fn peek_failure_and_do_both<S, F, C1, C2>(
    first: C1,
    second: C2,
) -> impl FnOnce(Outcome<S, F>) -> Projection<S>
where
    C1: FnOnce(&F),
    C2: FnOnce(&F),
{
    move |outcome| {
        outcome.either(Projection::single, |value| {
            first(&value);
            second(&value);
            Projection::empty()
        })
    }
}

/// Projects to a zero-or-one sequence of the success value.
///
/// The returned closure is `Fn + Copy`, so it can be handed straight to
/// `Iterator::flat_map`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::combinators::success;
///
/// let values: Vec<i32> = Outcome::<i32, &str>::succeeded(3).then(success()).collect();
/// assert_eq!(values, vec![3]);
/// ```
#[inline]
pub fn success<S, F>() -> impl Fn(Outcome<S, F>) -> Projection<S> + Copy {
    Outcome::into_projection
}
