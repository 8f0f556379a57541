//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`pipe!`], [`reason!`]
//! - **Types**: [`Outcome`], [`ExpectedOutcome`], [`ExpectedFailedReason`], [`FailureError`]
//! - **Traits**: [`Reason`], [`IntoOutcome`]
//! - **Combinators**: the loose set from [`crate::combinators`]; reach for
//!   [`crate::combinators::typed`] explicitly when failures must implement [`Reason`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let values: Vec<i32> = pipe!("21".parse::<i32>().into_outcome() =>
//!     on_success(|n: i32| n * 2),
//!     success(),
//! )
//! .collect();
//!
//! assert_eq!(values, vec![42]);
//! ```

// Macros
pub use crate::{pipe, reason};

// Core types
pub use crate::types::{ExpectedFailedReason, ExpectedOutcome, FailureError, Outcome};

// Traits
pub use crate::traits::{IntoOutcome, Reason};

// Combinators
pub use crate::combinators::{
    attempt, map, map_failure, on_failure, on_failure_do, on_success, on_success_do,
    peek_failure_and_do, peek_failure_and_do_both, success,
};
