//! Error translation for workflow invocations
//!
//! [`ErrorHandler::intercept`] wraps any fallible async operation. Success
//! passes through untouched; every failure is mapped to exactly one
//! [`ErrorOutcome`]:
//!
//! | failure | kind | message | violations |
//! |---|---|---|---|
//! | `ProposalError::ValidationFailed` | `ValidationFailed` | `Invalid parameters` | all of them |
//! | `ProposalError::AlreadyExists` | `AlreadyExists` | `Document already exists` | none |
//! | anything else | `Unexpected` | `unexpected error happened` | none |
//!
//! The underlying cause of an unexpected failure is logged and never copied
//! into the outcome.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::ProposalError;
use crate::validation::Violation;

pub const INVALID_PARAMETERS_MESSAGE: &str = "Invalid parameters";
pub const ALREADY_EXISTS_MESSAGE: &str = "Document already exists";
pub const UNEXPECTED_MESSAGE: &str = "unexpected error happened";

/// Stable, client-facing classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// One or more fields broke a rule; the client should fix and retry
    ValidationFailed,
    /// The document is already taken; retrying with it will not help
    AlreadyExists,
    /// Anything else
    Unexpected,
}

/// Structured description of a failed call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorOutcome {
    pub kind: ErrorKind,
    pub message: String,
    /// Empty unless `kind` is `ValidationFailed`
    pub violations: Vec<Violation>,
}

impl ErrorOutcome {
    pub fn validation_failed(violations: Vec<Violation>) -> Self {
        Self {
            kind: ErrorKind::ValidationFailed,
            message: INVALID_PARAMETERS_MESSAGE.to_string(),
            violations,
        }
    }

    pub fn already_exists() -> Self {
        Self {
            kind: ErrorKind::AlreadyExists,
            message: ALREADY_EXISTS_MESSAGE.to_string(),
            violations: Vec::new(),
        }
    }

    pub fn unexpected() -> Self {
        Self {
            kind: ErrorKind::Unexpected,
            message: UNEXPECTED_MESSAGE.to_string(),
            violations: Vec::new(),
        }
    }

    /// Maps any failure to its outcome
    ///
    /// The whole source chain is searched, so a `ProposalError` wrapped in
    /// context or in another error is still recognised.
    pub fn from_failure(failure: &anyhow::Error) -> Self {
        let recognised = failure
            .chain()
            .find_map(|cause| cause.downcast_ref::<ProposalError>());

        match recognised {
            Some(ProposalError::ValidationFailed(violations)) => {
                Self::validation_failed(violations.clone())
            }
            Some(ProposalError::AlreadyExists { .. }) => Self::already_exists(),
            Some(ProposalError::Store(_)) | None => Self::unexpected(),
        }
    }
}

impl From<anyhow::Error> for ErrorOutcome {
    fn from(failure: anyhow::Error) -> Self {
        Self::from_failure(&failure)
    }
}

/// Uniform failure interception for workflow calls
pub struct ErrorHandler;

impl ErrorHandler {
    /// Runs `call` and translates its failure, if any
    ///
    /// # Arguments
    ///
    /// * `operation` - Name of the wrapped operation, used in logs
    /// * `call` - The operation to run
    ///
    /// # Returns
    ///
    /// The operation's value, or the `ErrorOutcome` describing its failure
    pub async fn intercept<T, E, F, Fut>(operation: &'static str, call: F) -> Result<T, ErrorOutcome>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<anyhow::Error>,
    {
        debug!(operation, "Intercepting operation");

        match call().await {
            Ok(value) => Ok(value),
            Err(failure) => {
                let failure: anyhow::Error = failure.into();
                let outcome = ErrorOutcome::from_failure(&failure);
                match outcome.kind {
                    ErrorKind::Unexpected => {
                        error!(operation, error = ?failure, "Operation failed unexpectedly")
                    }
                    kind => warn!(
                        operation,
                        ?kind,
                        violations = outcome.violations.len(),
                        "Operation rejected"
                    ),
                }
                Err(outcome)
            }
        }
    }
}
