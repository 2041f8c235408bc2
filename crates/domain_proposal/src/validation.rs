//! Proposal field validation rules
//!
//! This module checks every field of a creation request except the document
//! format, which belongs to [`DocumentValidator`](crate::DocumentValidator).
//!
//! # Validation Rules
//!
//! - `name` must not be blank
//! - `document` must not be blank
//! - `email` must not be blank, and when present must be a well-formed address
//! - `address` must not be blank
//! - `salary` must be present and greater than or equal to zero
//!
//! Every rule is evaluated; a request with three bad fields yields three
//! violations in one pass. Each field contributes at most one violation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::proposal::CreateProposalRequest;

pub const NOT_BLANK_MESSAGE: &str = "must not be blank";
pub const EMAIL_MESSAGE: &str = "must be a well-formed email address";
pub const NOT_NULL_MESSAGE: &str = "must not be null";
pub const POSITIVE_OR_ZERO_MESSAGE: &str = "must be greater than or equal to 0";
pub const DECIMAL_MESSAGE: &str = "must be a valid decimal number";

/// A single field-level rule failure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the offending field
    pub field: String,
    /// Human-readable description of the rule that failed
    pub message: String,
}

impl Violation {
    /// Creates a violation on `field`
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of proposal validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Violations in the order the rules were evaluated
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self::default()
    }

    /// Whether no rule failed
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Adds a violation to the result
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Adds a violation on `field` with `message`
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.add_violation(Violation::new(field, message));
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.violations.extend(other.violations);
    }

    /// Returns the violations, or `Ok(())` when there are none
    pub fn into_result(self) -> Result<(), Vec<Violation>> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.violations)
        }
    }
}

/// Validator for proposal creation requests
pub struct ProposalValidator;

impl ProposalValidator {
    /// Validates all request fields except the document format
    ///
    /// # Arguments
    ///
    /// * `request` - The creation request to check
    ///
    /// # Returns
    ///
    /// A `ValidationResult` holding one violation per invalid field
    pub fn validate(request: &CreateProposalRequest) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::require_not_blank("name", &request.name, &mut result);
        Self::require_not_blank("document", &request.document, &mut result);
        Self::validate_email(&request.email, &mut result);
        Self::require_not_blank("address", &request.address, &mut result);
        Self::validate_salary(request.salary, &mut result);

        result
    }

    fn require_not_blank(field: &str, value: &str, result: &mut ValidationResult) {
        if value.trim().is_empty() {
            result.add_error(field, NOT_BLANK_MESSAGE);
        }
    }

    fn validate_email(email: &str, result: &mut ValidationResult) {
        if email.trim().is_empty() {
            result.add_error("email", NOT_BLANK_MESSAGE);
        } else if !email.validate_email() {
            result.add_error("email", EMAIL_MESSAGE);
        }
    }

    fn validate_salary(salary: Option<Decimal>, result: &mut ValidationResult) {
        match salary {
            None => result.add_error("salary", NOT_NULL_MESSAGE),
            Some(amount) if amount < Decimal::ZERO => {
                result.add_error("salary", POSITIVE_OR_ZERO_MESSAGE)
            }
            Some(_) => {}
        }
    }
}
