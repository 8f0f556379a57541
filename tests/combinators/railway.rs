//! End-to-end chains: email validation flowing down the success and failure tracks.

use std::cell::{Cell, RefCell};

use outcome_rail::combinators::{self, typed};
use outcome_rail::{reason, ExpectedFailedReason, ExpectedOutcome, Outcome, Reason};

fn is_valid_email(email: String) -> ExpectedOutcome<String> {
    if email.contains('@') {
        Outcome::succeeded(email)
    } else {
        Outcome::failed(reason!("{} is not an email", email))
    }
}

fn is_valid_domain_email(email: String) -> ExpectedOutcome<String> {
    if email.contains('.') {
        Outcome::succeeded(email)
    } else {
        Outcome::failed(reason!("{} is not a domain", email))
    }
}

fn to_upper_case(email: String) -> String {
    email.to_uppercase()
}

#[test]
fn scenario_failure_reason_is_rewritten_before_elimination() {
    let eliminated = Outcome::<i32, String>::failed("3 is not divisible by 2".to_string())
        .then(combinators::on_failure(|m: String| format!("Rejected: {m}")))
        .either(|n| n.to_string(), |m| m);

    assert_eq!(eliminated, "Rejected: 3 is not divisible by 2");
}

#[test]
fn scenario_valid_email_is_upper_cased() {
    let kept: Vec<String> = ExpectedOutcome::succeeded("valid@host".to_string())
        .then(typed::map(is_valid_email))
        .then(typed::on_success(to_upper_case))
        .then(typed::get_success())
        .collect();

    assert_eq!(kept, vec!["VALID@HOST".to_string()]);
}

#[test]
fn scenario_failed_input_never_reaches_steps() {
    let validated = Cell::new(0);
    let upper_cased = Cell::new(0);

    let kept: Vec<String> = ExpectedOutcome::failed(ExpectedFailedReason::new("invalid_email"))
        .then(typed::map(|email: String| {
            validated.set(validated.get() + 1);
            is_valid_email(email)
        }))
        .then(typed::on_success(|email: String| {
            upper_cased.set(upper_cased.get() + 1);
            to_upper_case(email)
        }))
        .then(typed::get_success())
        .collect();

    assert!(kept.is_empty());
    assert_eq!(validated.get(), 0);
    assert_eq!(upper_cased.get(), 0);
}

#[test]
fn scenario_first_failing_step_wins() {
    let outcome = ExpectedOutcome::succeeded("a@b".to_string())
        .then(typed::map(is_valid_email))
        .then(typed::map(is_valid_domain_email));

    assert_eq!(outcome, Outcome::Failed(ExpectedFailedReason::new("a@b is not a domain")));
}

#[test]
fn short_circuit_skips_every_later_step() {
    let calls = RefCell::new(Vec::new());

    let outcome = Outcome::<i32, String>::succeeded(0)
        .then(combinators::map(counted_step(&calls, 1, false)))
        .then(combinators::map(counted_step(&calls, 2, true)))
        .then(combinators::map(counted_step(&calls, 3, false)))
        .then(combinators::on_success(|n: i32| n * 100))
        .then(combinators::map(counted_step(&calls, 4, false)));

    assert_eq!(outcome, Outcome::Failed("step 2 failed".to_string()));
    assert_eq!(calls.into_inner(), vec![1, 2]);
}

fn counted_step(
    calls: &RefCell<Vec<usize>>,
    index: usize,
    fails: bool,
) -> impl FnOnce(i32) -> Outcome<i32, String> + '_ {
    move |value| {
        calls.borrow_mut().push(index);
        if fails {
            Outcome::failed(format!("step {index} failed"))
        } else {
            Outcome::succeeded(value + 1)
        }
    }
}

#[test]
fn stream_of_emails_splits_into_kept_and_rejected() {
    let rejected = RefCell::new(Vec::new());

    let kept: Vec<String> = [
        ExpectedOutcome::succeeded("valid_email@".to_string()),
        ExpectedOutcome::succeeded("invalid_email".to_string()),
    ]
    .into_iter()
    .flat_map(|email| {
        email
            .then(typed::map(is_valid_email))
            .then(typed::on_success(to_upper_case))
            .then(typed::map_failure(|reason: ExpectedFailedReason| {
                rejected.borrow_mut().push(format!("Rejected: {}", reason.rendered_message()));
                reason
            }))
            .then(typed::get_success())
    })
    .collect();

    assert_eq!(kept, vec!["VALID_EMAIL@".to_string()]);
    assert_eq!(
        rejected.into_inner(),
        vec!["Rejected: invalid_email is not an email".to_string()]
    );
}

#[test]
fn chained_validations_report_first_rejection() {
    let rejected = RefCell::new(Vec::new());

    let kept: Vec<String> = ["valid_email@email.fr", "invalid_email"]
        .into_iter()
        .map(|email| ExpectedOutcome::succeeded(email.to_string()))
        .flat_map(|email| {
            email
                .then(typed::map(is_valid_email))
                .then(typed::map(is_valid_domain_email))
                .then(typed::peek_failure_and_do(|reason: &ExpectedFailedReason| {
                    rejected.borrow_mut().push(format!("Rejected: {}", reason.rendered_message()))
                }))
        })
        .collect();

    assert_eq!(kept, vec!["valid_email@email.fr".to_string()]);
    assert_eq!(
        rejected.into_inner(),
        vec!["Rejected: invalid_email is not an email".to_string()]
    );
}

#[test]
fn on_failure_do_keeps_reason_for_later_steps() {
    let rejected = RefCell::new(Vec::new());

    let outcome = Outcome::<String, String>::succeeded("invalid_email".to_string())
        .then(combinators::map(|email: String| {
            if email.contains('@') {
                Outcome::succeeded(email)
            } else {
                Outcome::failed(format!("{email} is not an email"))
            }
        }))
        .then(combinators::on_failure_do(|m: &String| {
            rejected.borrow_mut().push(format!("Rejected: {m}"))
        }))
        .then(combinators::on_failure(|m: String| m.to_uppercase()));

    assert_eq!(outcome, Outcome::Failed("INVALID_EMAIL IS NOT AN EMAIL".to_string()));
    assert_eq!(rejected.into_inner(), vec!["Rejected: invalid_email is not an email".to_string()]);
}
