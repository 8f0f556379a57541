//! Core traits for outcome composition.
//!
//! - [`Reason`]: capability a typed failure payload provides (message + blankness)
//! - [`IntoOutcome`]: lifts a standard `Result` onto the outcome rail
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, Reason};
//!
//! let outcome = Err::<i32, &str>("rejected").into_outcome();
//! assert!(outcome.failed_value().is_some_and(|reason| reason.has_message()));
//! ```

pub mod into_outcome;
pub mod reason;

pub use into_outcome::IntoOutcome;
pub use reason::Reason;
