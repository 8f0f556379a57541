use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Reason;

/// Failure reason carrying a fixed, human-readable message.
///
/// This is the stock [`Reason`] for domains that only need to say *why* a step
/// failed. Domains with richer failures implement [`Reason`] on their own types.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ExpectedFailedReason, Reason};
///
/// let reason = ExpectedFailedReason::new("invalid_email is not an email");
/// assert!(reason.has_message());
/// assert_eq!(reason.to_string(), "invalid_email is not an email");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExpectedFailedReason {
    message: String,
}

impl ExpectedFailedReason {
    /// Creates a reason from any string-like message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::ExpectedFailedReason;
    ///
    /// let reason = ExpectedFailedReason::new(format!("{} is not a domain", "a@b"));
    /// assert_eq!(reason.message(), "a@b is not a domain");
    /// ```
    #[inline]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self { message: message.into() }
    }

    /// Returns the stored message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the reason, returning the stored message.
    #[must_use]
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Reason for ExpectedFailedReason {
    #[inline]
    fn rendered_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }
}

impl Display for ExpectedFailedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<String> for ExpectedFailedReason {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ExpectedFailedReason {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
