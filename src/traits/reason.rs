//! The capability every typed failure payload provides.
//!
//! # Examples
//!
//! ```
//! use std::borrow::Cow;
//! use outcome_rail::Reason;
//!
//! #[derive(Debug)]
//! enum SignupFailure {
//!     MissingAt(String),
//!     MissingDomain(String),
//! }
//!
//! impl Reason for SignupFailure {
//!     fn rendered_message(&self) -> Cow<'_, str> {
//!         match self {
//!             Self::MissingAt(email) => format!("{email} is not an email").into(),
//!             Self::MissingDomain(email) => format!("{email} is not a domain").into(),
//!         }
//!     }
//! }
//!
//! assert!(SignupFailure::MissingDomain("a@b".into()).has_message());
//! ```

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;

/// A failure payload that can render itself as a human-readable message.
///
/// Combinators in [`crate::combinators::typed`] only require this capability, so
/// any domain can plug in its own failure type without sharing a base type.
///
/// `rendered_message` must be pure and deterministic: calling it twice on the
/// same value yields the same text.
pub trait Reason {
    /// Renders the failure as a message for humans.
    fn rendered_message(&self) -> Cow<'_, str>;

    /// Returns `true` when the rendered message is not blank.
    ///
    /// A message made only of whitespace counts as blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Reason;
    ///
    /// assert!("3 is not divisible by 2".has_message());
    /// assert!(!"".has_message());
    /// assert!(!" \t\n".has_message());
    /// ```
    #[inline]
    fn has_message(&self) -> bool {
        !self.rendered_message().trim().is_empty()
    }
}

impl Reason for str {
    #[inline]
    fn rendered_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Reason for String {
    #[inline]
    fn rendered_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Reason for Cow<'_, str> {
    #[inline]
    fn rendered_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<R: Reason + ?Sized> Reason for &R {
    #[inline]
    fn rendered_message(&self) -> Cow<'_, str> {
        (**self).rendered_message()
    }

    #[inline]
    fn has_message(&self) -> bool {
        (**self).has_message()
    }
}

impl<R: Reason + ?Sized> Reason for Box<R> {
    #[inline]
    fn rendered_message(&self) -> Cow<'_, str> {
        (**self).rendered_message()
    }

    #[inline]
    fn has_message(&self) -> bool {
        (**self).has_message()
    }
}
