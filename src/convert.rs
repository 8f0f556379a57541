//! Conversions between [`Outcome`] and the standard library's `Result`/`Option`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//! use outcome_rail::convert::{outcome_to_result, result_to_outcome};
//!
//! let outcome = result_to_outcome(Ok::<i32, &str>(2));
//! assert_eq!(outcome, Outcome::Succeeded(2));
//! assert_eq!(outcome_to_result(outcome), Ok(2));
//! ```

use crate::traits::IntoOutcome;
use crate::types::Outcome;

/// Lifts a `Result`: `Ok` becomes `Succeeded`, `Err` becomes `Failed`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, &str>("not a number"));
/// assert_eq!(outcome, Outcome::Failed("not a number"));
/// ```
#[inline]
pub fn result_to_outcome<S, F>(result: Result<S, F>) -> Outcome<S, F> {
    result.into_outcome()
}

/// Lowers an outcome into a `Result` so it can be used with `?`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::convert::outcome_to_result;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::failed("boom")), Err("boom"));
/// ```
#[inline]
pub fn outcome_to_result<S, F>(outcome: Outcome<S, F>) -> Result<S, F> {
    outcome.into_result()
}

/// Lifts an `Option`, calling `or_failure` to build the reason for `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::convert::option_to_outcome;
///
/// let missing = option_to_outcome(None::<i32>, || "no value");
/// assert_eq!(missing, Outcome::Failed("no value"));
/// ```
#[inline]
pub fn option_to_outcome<S, F, M>(option: Option<S>, or_failure: M) -> Outcome<S, F>
where
    M: FnOnce() -> F,
{
    match option {
        Some(value) => Outcome::Succeeded(value),
        None => Outcome::Failed(or_failure()),
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        result.into_outcome()
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

/// Collects success values until the first failure.
///
/// Only the first `Failed` survives: iteration stops there and later outcomes
/// are never pulled from the source.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::succeeded(1), Outcome::succeeded(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Succeeded(vec![1, 2]));
///
/// let first_failure: Outcome<Vec<i32>, &str> =
///     vec![Outcome::succeeded(1), Outcome::failed("first"), Outcome::failed("second")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_failure, Outcome::Failed("first"));
/// ```
impl<S, F, C> FromIterator<Outcome<S, F>> for Outcome<C, F>
where
    C: FromIterator<S>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<S, F>>>(iter: I) -> Self {
        iter.into_iter().map(Outcome::into_result).collect::<Result<C, F>>().into_outcome()
    }
}
