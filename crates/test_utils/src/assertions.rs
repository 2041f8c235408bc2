//! Custom Test Assertions
//!
//! Assertion helpers for `ErrorOutcome` that print the whole outcome on
//! failure instead of a bare `false`.

use domain_proposal::{ErrorKind, ErrorOutcome, Violation};

/// Asserts the outcome is a validation failure on exactly `fields`, in order
///
/// # Panics
///
/// Panics if the kind differs or the violated fields differ
pub fn assert_violated_fields(outcome: &ErrorOutcome, fields: &[&str]) {
    assert_eq!(
        outcome.kind,
        ErrorKind::ValidationFailed,
        "Expected a validation failure, got {outcome:?}"
    );
    let actual: Vec<&str> = outcome.violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(actual, fields, "Violated fields differ: {outcome:?}");
}

/// Asserts the outcome carries `violation` among its violations
pub fn assert_has_violation(outcome: &ErrorOutcome, field: &str, message: &str) {
    let expected = Violation::new(field, message);
    assert!(
        outcome.violations.contains(&expected),
        "Expected violation {expected:?} in {:?}",
        outcome.violations
    );
}

/// Asserts the outcome is the duplicate-document outcome
pub fn assert_already_exists(outcome: &ErrorOutcome) {
    assert_eq!(outcome, &ErrorOutcome::already_exists(), "Expected AlreadyExists");
}

/// Asserts the outcome is the opaque unexpected outcome
pub fn assert_unexpected(outcome: &ErrorOutcome) {
    assert_eq!(outcome, &ErrorOutcome::unexpected(), "Expected Unexpected");
}
