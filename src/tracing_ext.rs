//! Tracing integration for outcome-rail.
//!
//! The core never logs. These combinators are the explicit opt-in: they peek
//! at an outcome, emit a `tracing` event, and hand the outcome back untouched.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::traits::Reason;
use crate::types::Outcome;

/// Emits a `WARN` event for a failed outcome and a `TRACE` event for a
/// successful one, then returns the outcome unchanged.
///
/// Failure events carry the `operation` name and the rendered `reason`.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::combinators::typed::map;
/// use outcome_rail::tracing_ext::trace_failure;
///
/// let checked = email
///     .then(map(is_valid_email))
///     .then(trace_failure("signup.email"));
/// ```
pub fn trace_failure<S, F>(operation: &'static str) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, F>
where
    F: Reason,
{
    move |outcome| {
        outcome.either(
            |value| {
                tracing::trace!(operation, "outcome succeeded");
                Outcome::Succeeded(value)
            },
            |reason| {
                record_failure(operation, &reason);
                Outcome::Failed(reason)
            },
        )
    }
}

/// Extension trait for logging an outcome in method position.
pub trait TracedOutcomeExt<S, F> {
    /// Same as [`trace_failure`], called as a method.
    fn traced(self, operation: &'static str) -> Outcome<S, F>;

    /// Records a failure inside `span` before returning the outcome unchanged.
    fn traced_in(self, span: &Span, operation: &'static str) -> Outcome<S, F>;
}

impl<S, F: Reason> TracedOutcomeExt<S, F> for Outcome<S, F> {
    fn traced(self, operation: &'static str) -> Outcome<S, F> {
        self.then(trace_failure(operation))
    }

    fn traced_in(self, span: &Span, operation: &'static str) -> Outcome<S, F> {
        span.in_scope(|| self.traced(operation))
    }
}

fn record_failure<F: Reason>(operation: &'static str, reason: &F) {
    if reason.has_message() {
        tracing::warn!(operation, reason = %reason.rendered_message(), "outcome failed");
    } else {
        tracing::warn!(operation, "outcome failed without a reason");
    }
}
