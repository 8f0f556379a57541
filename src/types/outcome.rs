//! The two-variant [`Outcome`] value and its eliminator.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let ok: Outcome<i32, &str> = Outcome::succeeded(2);
//! let doubled = ok.either(|value| value * 2, |_| 0);
//! assert_eq!(doubled, 4);
//! ```

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Reason;
use crate::types::failure_error::FailureError;
use crate::types::projection::Projection;

/// Either a successful value of type `S` or a failure payload of type `F`.
///
/// `Outcome` is a plain value: it is never mutated after construction, and every
/// combinator in [`crate::combinators`] builds a new `Outcome` (or passes the
/// existing one through untouched).
///
/// # Type Parameters
///
/// * `S` - The success value type
/// * `F` - The failure payload type. The loose combinators accept any `F`;
///   the [`typed`](crate::combinators::typed) combinators require
///   [`Reason`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{ExpectedFailedReason, Outcome};
///
/// let failed: Outcome<i32, ExpectedFailedReason> =
///     Outcome::failed(ExpectedFailedReason::new("3 is not divisible by 2"));
///
/// assert!(failed.is_failed());
/// assert_eq!(failed.to_string(), "Failure{3 is not divisible by 2}");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<S, F> {
    Succeeded(S),
    Failed(F),
}

impl<S, F> Outcome<S, F> {
    /// Wraps `value` as a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::succeeded(2);
    /// assert_eq!(outcome, Outcome::Succeeded(2));
    /// ```
    #[inline]
    pub fn succeeded(value: S) -> Self {
        Self::Succeeded(value)
    }

    /// Wraps `value` as a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::failed("boom");
    /// assert_eq!(outcome, Outcome::Failed("boom"));
    /// ```
    #[inline]
    pub fn failed(value: F) -> Self {
        Self::Failed(value)
    }

    /// Folds the outcome into a single value.
    ///
    /// Exactly one of the two handlers runs, receiving the held payload. This is
    /// the only place the variant is inspected; every combinator is written in
    /// terms of it.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Called with the success value
    /// * `on_failure` - Called with the failure payload
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let message = Outcome::<i32, &str>::failed("3 is odd")
    ///     .either(|n| format!("{n} is even"), |reason| format!("rejected: {reason}"));
    ///
    /// assert_eq!(message, "rejected: 3 is odd");
    /// ```
    #[inline]
    pub fn either<R, OnS, OnF>(self, on_success: OnS, on_failure: OnF) -> R
    where
        OnS: FnOnce(S) -> R,
        OnF: FnOnce(F) -> R,
    {
        match self {
            Self::Succeeded(value) => on_success(value),
            Self::Failed(value) => on_failure(value),
        }
    }

    /// Applies `step` to this outcome.
    ///
    /// Exists so transform chains read left to right:
    /// `outcome.then(a).then(b)` instead of `b(a(outcome))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    /// use outcome_rail::combinators::{on_success, success};
    ///
    /// let values: Vec<i32> = Outcome::<i32, &str>::succeeded(4)
    ///     .then(on_success(|n: i32| n + 1))
    ///     .then(success())
    ///     .collect();
    ///
    /// assert_eq!(values, vec![5]);
    /// ```
    #[inline]
    pub fn then<R, Step>(self, step: Step) -> R
    where
        Step: FnOnce(Self) -> R,
    {
        step(self)
    }

    /// Returns `true` if the outcome holds a success value.
    #[must_use]
    #[inline]
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns `true` if the outcome holds a failure payload.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_succeeded()
    }

    /// Borrows both payloads, producing an `Outcome<&S, &F>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(value),
            Self::Failed(value) => Outcome::Failed(value),
        }
    }

    /// Returns the success value, discarding any failure.
    #[must_use]
    #[inline]
    pub fn succeeded_value(self) -> Option<S> {
        self.either(Some, |_| None)
    }

    /// Returns the failure payload, discarding any success value.
    #[must_use]
    #[inline]
    pub fn failed_value(self) -> Option<F> {
        self.either(|_| None, Some)
    }

    /// Projects the outcome into a zero-or-one sequence of success values.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::succeeded(7).into_projection().len(), 1);
    /// assert_eq!(Outcome::<i32, &str>::failed("no").into_projection().len(), 0);
    /// ```
    #[inline]
    pub fn into_projection(self) -> Projection<S> {
        self.either(Projection::single, |_| Projection::empty())
    }

    /// Converts into a standard [`Result`], keeping the payloads as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::failed("bad").into_result(), Err("bad"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.either(Ok, Err)
    }

    /// Ends a chain by wrapping the final failure reason in a [`FailureError`],
    /// ready for `?` propagation into code built on `core::error::Error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ExpectedFailedReason, Outcome};
    ///
    /// let err = Outcome::<i32, _>::failed(ExpectedFailedReason::new("a@b is not a domain"))
    ///     .into_failure_error()
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "a@b is not a domain");
    /// ```
    #[inline]
    pub fn into_failure_error(self) -> Result<S, FailureError<F>>
    where
        F: Reason,
    {
        self.either(Ok, |reason| Err(FailureError::new(reason)))
    }
}

/// Shorthand for [`Outcome::succeeded`].
#[inline]
pub fn succeeded<S, F>(value: S) -> Outcome<S, F> {
    Outcome::Succeeded(value)
}

/// Shorthand for [`Outcome::failed`].
#[inline]
pub fn failed<S, F>(value: F) -> Outcome<S, F> {
    Outcome::Failed(value)
}

/// Renders an outcome whose failure is a [`Reason`], using the rendered message.
///
/// Returned by [`Outcome::display_reason`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayReason<'a, S, F> {
    outcome: &'a Outcome<S, F>,
}

impl<S: Display, F: Reason> Display for DisplayReason<'_, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Succeeded(value) => write!(f, "Success{{{}}}", value),
            Outcome::Failed(reason) => write!(f, "Failure{{{}}}", reason.rendered_message()),
        }
    }
}

impl<S, F: Reason> Outcome<S, F> {
    /// Display adapter for failures that implement [`Reason`] but not `Display`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use outcome_rail::{Outcome, Reason};
    ///
    /// struct MissingAt(String);
    ///
    /// impl Reason for MissingAt {
    ///     fn rendered_message(&self) -> Cow<'_, str> {
    ///         format!("{} is not an email", self.0).into()
    ///     }
    /// }
    ///
    /// let outcome: Outcome<i32, _> = Outcome::failed(MissingAt("invalid_email".into()));
    /// assert_eq!(outcome.display_reason().to_string(), "Failure{invalid_email is not an email}");
    /// ```
    #[inline]
    pub fn display_reason(&self) -> DisplayReason<'_, S, F> {
        DisplayReason { outcome: self }
    }
}

impl<S: Display, F: Display> Display for Outcome<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded(value) => write!(f, "Success{{{}}}", value),
            Self::Failed(reason) => write!(f, "Failure{{{}}}", reason),
        }
    }
}
