//! Outcome values and the payload types that travel with them.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ExpectedFailedReason, Outcome};
//!
//! let outcome: Outcome<i32, ExpectedFailedReason> = Outcome::succeeded(2);
//! assert_eq!(outcome.to_string(), "Success{2}");
//! ```

pub mod expected_reason;
pub mod failure_error;
pub mod outcome;
pub mod projection;

pub use expected_reason::*;
pub use failure_error::*;
pub use outcome::*;
pub use projection::*;

/// Outcome whose failures carry an [`ExpectedFailedReason`].
///
/// # Type Parameters
///
/// * `S` - The success value type
pub type ExpectedOutcome<S> = Outcome<S, ExpectedFailedReason>;
