//! Railway-style outcomes: a value either travels down the success track or
//! switches, for good, onto the failure track.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Eliminating an Outcome
//!
//! ```
//! use outcome_rail::{reason, ExpectedOutcome, Outcome, Reason};
//!
//! fn is_divisible_by_two(number: i32) -> ExpectedOutcome<i32> {
//!     if number % 2 == 0 {
//!         Outcome::succeeded(number)
//!     } else {
//!         Outcome::failed(reason!("{} is not divisible by 2", number))
//!     }
//! }
//!
//! let message = is_divisible_by_two(3).either(
//!     |n| format!("{n} is a multiple of 2"),
//!     |reason| format!("Operation failed: {}", reason.rendered_message()),
//! );
//! assert_eq!(message, "Operation failed: 3 is not divisible by 2");
//! ```
//!
//! ## Short-Circuiting Chain
//!
//! ```
//! use outcome_rail::combinators::{map, success};
//! use outcome_rail::Outcome;
//!
//! fn is_valid_email(email: &str) -> Outcome<&str, String> {
//!     if email.contains('@') {
//!         Outcome::succeeded(email)
//!     } else {
//!         Outcome::failed(format!("{email} is not an email"))
//!     }
//! }
//!
//! fn is_valid_domain(email: &str) -> Outcome<&str, String> {
//!     if email.contains('.') {
//!         Outcome::succeeded(email)
//!     } else {
//!         Outcome::failed(format!("{email} is not a domain"))
//!     }
//! }
//!
//! let outcome = Outcome::succeeded("a@b")
//!     .then(map(is_valid_email))
//!     .then(map(is_valid_domain));
//! assert_eq!(outcome, Outcome::Failed("a@b is not a domain".to_string()));
//!
//! let kept: Vec<&str> = outcome.then(success()).collect();
//! assert!(kept.is_empty());
//! ```
//!
//! # Feature Flags
//!
//! - `std`: links `std`. Nothing in the crate needs it; it exists so `tracing`
//!   can depend on it, and [`FailureError`] is a `std::error::Error` with or
//!   without it since that trait is `core::error::Error`.
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`] and [`ExpectedFailedReason`].
//! - `tracing`: the `tracing_ext` module (implies `std`).
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Combinators for chaining outcomes
pub mod combinators;
/// Conversions between Outcome, Result, and Option
pub mod convert;
/// Macros for building chains and failure reasons
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits: the failure reason capability and Result lifting
pub mod traits;
/// Outcome and its payload types
pub mod types;

/// Tracing integration for logging outcomes (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    failed, succeeded, DisplayReason, ExpectedFailedReason, ExpectedOutcome, FailureError, Outcome,
    Projection,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::borrow::Cow;
    pub use alloc::format;
    pub use alloc::string::ToString;
}
