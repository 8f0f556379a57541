use core::fmt::{self, Display};

use crate::traits::Reason;

const UNSPECIFIED: &str = "unspecified failure";

/// The final failure reason of a chain, wrapped as a [`core::error::Error`].
///
/// Outcomes never raise errors on their own; this wrapper is the one bridge to
/// error-propagating code. Build it with
/// [`Outcome::into_failure_error`](crate::Outcome::into_failure_error).
///
/// A reason without a message renders as `"unspecified failure"`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ExpectedFailedReason, FailureError};
///
/// let err = FailureError::new(ExpectedFailedReason::new("   "));
/// assert_eq!(err.to_string(), "unspecified failure");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureError<F> {
    reason: F,
}

impl<F: Reason> FailureError<F> {
    /// Wraps `reason`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ExpectedFailedReason, FailureError};
    ///
    /// let err = FailureError::new(ExpectedFailedReason::new("a@b is not a domain"));
    /// assert_eq!(err.reason().message(), "a@b is not a domain");
    /// ```
    #[inline]
    pub fn new(reason: F) -> Self {
        Self { reason }
    }

    /// Returns a reference to the wrapped reason.
    #[inline]
    pub fn reason(&self) -> &F {
        &self.reason
    }

    /// Consumes the error, returning the wrapped reason.
    #[inline]
    pub fn into_reason(self) -> F {
        self.reason
    }
}

impl<F: Reason> Display for FailureError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.has_message() {
            f.write_str(&self.reason.rendered_message())
        } else {
            f.write_str(UNSPECIFIED)
        }
    }
}

impl<F> core::error::Error for FailureError<F> where F: Reason + fmt::Debug {}

impl<F: Reason> From<F> for FailureError<F> {
    #[inline]
    fn from(reason: F) -> Self {
        Self::new(reason)
    }
}
