use criterion::Criterion;
use outcome_rail::{reason, ExpectedOutcome, Outcome};
use std::sync::OnceLock;
use std::time::Duration;

pub fn realistic_emails() -> &'static Vec<String> {
    static INSTANCE: OnceLock<Vec<String>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        (0..1000)
            .map(|id| match id % 4 {
                0 => format!("user{id}"),
                1 => format!("user{id}@company"),
                _ => format!("user{id}@company.com"),
            })
            .collect()
    })
}

pub fn is_valid_email(email: String) -> ExpectedOutcome<String> {
    if email.contains('@') {
        Outcome::succeeded(email)
    } else {
        Outcome::failed(reason!("{} is not an email", email))
    }
}

pub fn is_valid_domain_email(email: String) -> ExpectedOutcome<String> {
    if email.contains('.') {
        Outcome::succeeded(email)
    } else {
        Outcome::failed(reason!("{} is not a domain", email))
    }
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
