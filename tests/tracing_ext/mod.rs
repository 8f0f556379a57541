//! Tests for tracing integration.

use outcome_rail::combinators::typed::map;
use outcome_rail::tracing_ext::{trace_failure, TracedOutcomeExt};
use outcome_rail::{reason, ExpectedFailedReason, ExpectedOutcome, Outcome};
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Span, Subscriber};

fn is_valid_email(email: String) -> ExpectedOutcome<String> {
    if email.contains('@') {
        Outcome::succeeded(email)
    } else {
        Outcome::failed(reason!("{} is not an email", email))
    }
}

#[test]
fn trace_failure_passes_failure_through() {
    let outcome = ExpectedOutcome::succeeded("invalid_email".to_string())
        .then(map(is_valid_email))
        .then(trace_failure("signup.email"));

    assert_eq!(
        outcome,
        Outcome::Failed(ExpectedFailedReason::new("invalid_email is not an email"))
    );
}

#[test]
fn trace_failure_passes_success_through() {
    let outcome = ExpectedOutcome::succeeded("a@b.c".to_string()).then(trace_failure("signup"));
    assert_eq!(outcome, Outcome::Succeeded("a@b.c".to_string()));
}

#[test]
fn traced_handles_blank_reason() {
    let outcome = ExpectedOutcome::<i32>::failed(ExpectedFailedReason::new("")).traced("blank");
    assert!(outcome.is_failed());
}

#[test]
fn traced_in_disabled_span_is_harmless() {
    let span = Span::none();
    let outcome = ExpectedOutcome::succeeded(1).traced_in(&span, "noop");
    assert_eq!(outcome, Outcome::Succeeded(1));
}

type Fields = Vec<(&'static str, String)>;

/// Subscriber that records every event's level and fields.
#[derive(Clone, Default)]
struct Capture {
    events: Arc<Mutex<Vec<(Level, Fields)>>>,
}

impl Capture {
    fn events(&self) -> Vec<(Level, Fields)> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

struct FieldVisitor<'a>(&'a mut Fields);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name(), format!("{value:?}")));
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = Fields::new();
        event.record(&mut FieldVisitor(&mut fields));
        if let Ok(mut events) = self.events.lock() {
            events.push((*event.metadata().level(), fields));
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn field<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
    fields.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
}

#[test]
fn failure_emits_warn_with_operation_and_reason() {
    let capture = Capture::default();
    tracing::subscriber::with_default(capture.clone(), || {
        let _ = ExpectedOutcome::<i32>::failed(ExpectedFailedReason::new("bad")).traced("op");
    });

    let events = capture.events();
    assert_eq!(events.len(), 1);
    let (level, fields) = &events[0];
    assert_eq!(*level, Level::WARN);
    assert_eq!(field(fields, "message"), Some("outcome failed"));
    assert_eq!(field(fields, "operation"), Some("op"));
    assert_eq!(field(fields, "reason"), Some("bad"));
}

#[test]
fn success_emits_trace_without_reason() {
    let capture = Capture::default();
    tracing::subscriber::with_default(capture.clone(), || {
        let _ = ExpectedOutcome::succeeded(1).then(trace_failure("op"));
    });

    let events = capture.events();
    assert_eq!(events.len(), 1);
    let (level, fields) = &events[0];
    assert_eq!(*level, Level::TRACE);
    assert_eq!(field(fields, "message"), Some("outcome succeeded"));
    assert_eq!(field(fields, "operation"), Some("op"));
    assert_eq!(field(fields, "reason"), None);
}

#[test]
fn blank_reason_emits_warn_without_reason_field() {
    let capture = Capture::default();
    tracing::subscriber::with_default(capture.clone(), || {
        let _ = ExpectedOutcome::<i32>::failed(ExpectedFailedReason::new("  ")).traced("blank");
    });

    let events = capture.events();
    assert_eq!(events.len(), 1);
    let (level, fields) = &events[0];
    assert_eq!(*level, Level::WARN);
    assert_eq!(field(fields, "message"), Some("outcome failed without a reason"));
    assert_eq!(field(fields, "operation"), Some("blank"));
    assert_eq!(field(fields, "reason"), None);
}
