//! Combinators for outcomes whose failures implement [`Reason`].
//!
//! Same railway semantics as the parent module; the `Reason` bound lets the
//! failure side be rendered and logged uniformly whatever the domain.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ExpectedFailedReason, ExpectedOutcome, Outcome, Reason};
//! use outcome_rail::combinators::typed::{get_success, map, map_failure, on_success};
//!
//! fn is_valid_email(email: String) -> ExpectedOutcome<String> {
//!     if email.contains('@') {
//!         Outcome::succeeded(email)
//!     } else {
//!         Outcome::failed(ExpectedFailedReason::new(format!("{email} is not an email")))
//!     }
//! }
//!
//! let mut rejected = Vec::new();
//! let kept: Vec<String> = ExpectedOutcome::succeeded("invalid_email".to_string())
//!     .then(map(is_valid_email))
//!     .then(on_success(|email: String| email.to_uppercase()))
//!     .then(map_failure(|reason: ExpectedFailedReason| {
//!         rejected.push(format!("Rejected: {}", reason.rendered_message()));
//!         reason
//!     }))
//!     .then(get_success())
//!     .collect();
//!
//! assert!(kept.is_empty());
//! assert_eq!(rejected, vec!["Rejected: invalid_email is not an email".to_string()]);
//! ```

use crate::traits::Reason;
use crate::types::{Outcome, Projection};

/// Replaces the success value with `f(value)`; failures pass through.
#[inline]
pub fn on_success<S, S1, F, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S1, F>
where
    F: Reason,
    M: FnOnce(S) -> S1,
{
    super::on_success(f)
}

/// Replaces the failure reason with `f(reason)`; successes pass through.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ExpectedFailedReason, ExpectedOutcome, Reason};
/// use outcome_rail::combinators::typed::map_failure;
///
/// let message = ExpectedOutcome::<i32>::failed("3 is not divisible by 2".into())
///     .then(map_failure(|reason: ExpectedFailedReason| {
///         ExpectedFailedReason::new(format!("Rejected: {}", reason.rendered_message()))
///     }))
///     .either(|n| n.to_string(), |reason| reason.into_message());
///
/// assert_eq!(message, "Rejected: 3 is not divisible by 2");
/// ```
#[inline]
pub fn map_failure<S, F, F1, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, F1>
where
    F: Reason,
    F1: Reason,
    M: FnOnce(F) -> F1,
{
    super::on_failure(f)
}

/// Chains a step that can itself fail; skipped once the outcome has failed.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ExpectedFailedReason, ExpectedOutcome, Outcome};
/// use outcome_rail::combinators::typed::map;
///
/// fn is_valid_domain(email: String) -> ExpectedOutcome<String> {
///     if email.contains('.') {
///         Outcome::succeeded(email)
///     } else {
///         Outcome::failed(ExpectedFailedReason::new(format!("{email} is not a domain")))
///     }
/// }
///
/// let outcome = ExpectedOutcome::succeeded("a@b".to_string()).then(map(is_valid_domain));
/// assert_eq!(outcome, Outcome::Failed(ExpectedFailedReason::new("a@b is not a domain")));
/// ```
#[inline]
pub fn map<S, S1, F, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S1, F>
where
    F: Reason,
    M: FnOnce(S) -> Outcome<S1, F>,
{
    super::map(f)
}

/// Runs `first` then `second` on the success value; the outcome is unchanged.
#[inline]
pub fn on_success_do<S, F, C1, C2>(
    first: C1,
    second: C2,
) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, F>
where
    F: Reason,
    C1: FnOnce(&S),
    C2: FnOnce(&S),
{
    super::on_success_do(first, second)
}

/// Projects to the success value, running `f` on the failure reason first.
#[inline]
pub fn peek_failure_and_do<S, F, C>(f: C) -> impl FnOnce(Outcome<S, F>) -> Projection<S>
where
    F: Reason,
    C: FnOnce(&F),
{
    super::peek_failure_and_do(f)
}

/// Projects to the success value, running `first` then `second` on a failure.
#[inline]
pub fn peek_failure_and_do_both<S, F, C1, C2>(
    first: C1,
    second: C2,
) -> impl FnOnce(Outcome<S, F>) -> Projection<S>
where
    F: Reason,
    C1: FnOnce(&F),
    C2: FnOnce(&F),
{
    super::peek_failure_and_do_both(first, second)
}

/// Projects to a zero-or-one sequence of the success value.
#[inline]
pub fn get_success<S, F>() -> impl Fn(Outcome<S, F>) -> Projection<S> + Copy
where
    F: Reason,
{
    super::success()
}
