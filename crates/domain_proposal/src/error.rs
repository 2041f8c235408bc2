//! Proposal domain errors
//!
//! These are the typed failures the creation workflow raises. They are never
//! sent to clients as-is; [`ErrorHandler`](crate::ErrorHandler) translates
//! them into an [`ErrorOutcome`](crate::ErrorOutcome).

use thiserror::Error;

use core_kernel::PortError;

use crate::validation::Violation;

/// Errors that can occur while creating a proposal
#[derive(Debug, Error)]
pub enum ProposalError {
    /// A proposal with the same document is already stored
    #[error("Proposal already exists for document {document}")]
    AlreadyExists { document: String },

    /// One or more field rules failed
    #[error("Proposal validation failed with {} violation(s)", .0.len())]
    ValidationFailed(Vec<Violation>),

    /// The store failed for a reason other than a uniqueness conflict
    #[error("Proposal store failure: {0}")]
    Store(#[source] PortError),
}

impl ProposalError {
    /// Creates an AlreadyExists error for `document`
    pub fn already_exists(document: impl Into<String>) -> Self {
        ProposalError::AlreadyExists {
            document: document.into(),
        }
    }

    /// Creates a ValidationFailed error from collected violations
    pub fn validation_failed(violations: Vec<Violation>) -> Self {
        ProposalError::ValidationFailed(violations)
    }

    /// Classifies a store failure raised while persisting `document`
    ///
    /// A uniqueness conflict means another call stored the same document
    /// between the existence check and the write.
    pub fn from_save_failure(document: &str, error: PortError) -> Self {
        if error.is_conflict() {
            Self::already_exists(document)
        } else {
            ProposalError::Store(error)
        }
    }
}
