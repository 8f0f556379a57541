//! Extension trait for lifting a `Result` onto the outcome rail.

use crate::types::Outcome;

/// Converts a [`Result`] into an [`Outcome`] so it can enter a combinator chain.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::IntoOutcome;
/// use outcome_rail::Outcome;
///
/// let parsed = "42".parse::<i32>().into_outcome();
/// assert_eq!(parsed, Outcome::Succeeded(42));
/// ```
pub trait IntoOutcome<S, F> {
    /// Moves the payload into the matching `Outcome` variant.
    fn into_outcome(self) -> Outcome<S, F>;

    /// Like [`into_outcome`](IntoOutcome::into_outcome), but maps the failure
    /// payload on the way in.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::IntoOutcome;
    /// use outcome_rail::{ExpectedFailedReason, Outcome};
    ///
    /// let parsed = "x".parse::<i32>()
    ///     .into_outcome_with(|e| ExpectedFailedReason::new(e.to_string()));
    /// assert!(parsed.is_failed());
    /// ```
    fn into_outcome_with<F1, M>(self, map: M) -> Outcome<S, F1>
    where
        M: FnOnce(F) -> F1;
}

impl<S, F> IntoOutcome<S, F> for Result<S, F> {
    #[inline]
    fn into_outcome(self) -> Outcome<S, F> {
        match self {
            Ok(value) => Outcome::Succeeded(value),
            Err(reason) => Outcome::Failed(reason),
        }
    }

    #[inline]
    fn into_outcome_with<F1, M>(self, map: M) -> Outcome<S, F1>
    where
        M: FnOnce(F) -> F1,
    {
        match self {
            Ok(value) => Outcome::Succeeded(value),
            Err(reason) => Outcome::Failed(map(reason)),
        }
    }
}
