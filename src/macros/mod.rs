//! Ergonomic macros for building chains and failure reasons.
//!
//! - [`macro@crate::pipe`] - Threads an outcome through a list of steps with
//!   [`Outcome::then`](crate::Outcome::then).
//! - [`macro@crate::reason`] - Formats an
//!   [`ExpectedFailedReason`](crate::ExpectedFailedReason) in place.
//! - [`macro@crate::impl_reason`] - Implements [`Reason`](crate::Reason) for a
//!   type through its `Display` implementation.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::combinators::typed::{get_success, map, on_success};
//! use outcome_rail::{pipe, reason, ExpectedOutcome, Outcome};
//!
//! fn is_valid_email(email: String) -> ExpectedOutcome<String> {
//!     if email.contains('@') {
//!         Outcome::succeeded(email)
//!     } else {
//!         Outcome::failed(reason!("{} is not an email", email))
//!     }
//! }
//!
//! let kept: Vec<String> = pipe!(ExpectedOutcome::succeeded("valid@host".to_string()) =>
//!     map(is_valid_email),
//!     on_success(|email: String| email.to_uppercase()),
//!     get_success(),
//! )
//! .collect();
//!
//! assert_eq!(kept, vec!["VALID@HOST".to_string()]);
//! ```

/// Threads an outcome through each step, left to right.
///
/// `pipe!(outcome => a, b, c)` expands to `outcome.then(a).then(b).then(c)`.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::combinators::{on_failure, on_success};
/// use outcome_rail::{pipe, Outcome};
///
/// let outcome = pipe!(Outcome::<i32, &str>::succeeded(4) =>
///     on_success(|n: i32| n + 1),
///     on_failure(|reason: &str| reason.len()),
/// );
///
/// assert_eq!(outcome, Outcome::Succeeded(5));
/// ```
#[macro_export]
macro_rules! pipe {
    ($outcome:expr $(,)?) => {
        $outcome
    };
    ($outcome:expr => $($step:expr),+ $(,)?) => {
        $outcome$(.then($step))+
    };
}

/// Builds an [`ExpectedFailedReason`](crate::ExpectedFailedReason) from a
/// format string.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use outcome_rail::{reason, Reason};
///
/// let number = 3;
/// let reason = reason!("{} is not divisible by 2", number);
/// assert_eq!(reason.rendered_message(), "3 is not divisible by 2");
/// ```
#[macro_export]
macro_rules! reason {
    ($($arg:tt)*) => {
        $crate::ExpectedFailedReason::new($crate::__private::format!($($arg)*))
    };
}

/// Implements [`Reason`](crate::Reason) for a custom type.
///
/// The rendered message is the type's `Display` output.
///
/// # Arguments
///
/// * `$type` - The type to implement `Reason` for.
///
/// # Examples
///
/// ```
/// use outcome_rail::{impl_reason, Reason};
/// use std::fmt;
///
/// struct NotDivisible {
///     number: i32,
/// }
///
/// impl fmt::Display for NotDivisible {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{} is not divisible by 2", self.number)
///     }
/// }
///
/// impl_reason!(NotDivisible);
///
/// assert_eq!(NotDivisible { number: 3 }.rendered_message(), "3 is not divisible by 2");
/// ```
#[macro_export]
macro_rules! impl_reason {
    ($type:ty) => {
        impl $crate::traits::Reason for $type {
            fn rendered_message(&self) -> $crate::__private::Cow<'_, str> {
                $crate::__private::Cow::Owned($crate::__private::ToString::to_string(self))
            }
        }
    };
}
