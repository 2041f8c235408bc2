//! Proposal creation workflow
//!
//! Steps, in order:
//!
//! 1. Ask the store whether the document is taken. If so, fail with
//!    `AlreadyExists` without validating anything else.
//! 2. Run `ProposalValidator` and `DocumentValidator` and fail with every
//!    violation they report.
//! 3. Save. A uniqueness conflict raised by the store here is reported as
//!    `AlreadyExists`, exactly like step 1.
//! 4. Return the identifier and creation time the store assigned.
//!
//! Nothing is retried here.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use core_kernel::ProposalId;

use crate::document::DocumentValidator;
use crate::error::ProposalError;
use crate::ports::ProposalStore;
use crate::proposal::{CreateProposalRequest, NewProposal};
use crate::validation::ProposalValidator;

/// Successful outcome of a creation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalCreated {
    pub id: ProposalId,
    pub created_at: DateTime<Utc>,
}

/// Creates proposals against a `ProposalStore`
#[derive(Clone)]
pub struct CreateProposalWorkflow {
    store: Arc<dyn ProposalStore>,
}

impl CreateProposalWorkflow {
    /// Creates a workflow backed by `store`
    pub fn new(store: Arc<dyn ProposalStore>) -> Self {
        Self { store }
    }

    /// Returns the backing store
    pub fn store(&self) -> &Arc<dyn ProposalStore> {
        &self.store
    }

    /// Creates a proposal
    ///
    /// # Errors
    ///
    /// - `ProposalError::AlreadyExists` if the document is already stored,
    ///   whether detected before validation or by the store on save
    /// - `ProposalError::ValidationFailed` with every violated rule
    /// - `ProposalError::Store` for any other store failure
    #[instrument(skip(self, request), fields(document = %request.document))]
    pub async fn create(&self, request: CreateProposalRequest) -> Result<ProposalCreated, ProposalError> {
        info!("New proposal request");

        if self
            .store
            .exists_by_document(&request.document)
            .await
            .map_err(ProposalError::Store)?
        {
            warn!("Proposal already exists");
            return Err(ProposalError::already_exists(request.document));
        }

        let mut validation = ProposalValidator::validate(&request);
        if let Err(violation) = DocumentValidator::validate(&request.document) {
            validation.add_violation(violation);
        }
        validation
            .into_result()
            .map_err(ProposalError::validation_failed)?;

        let document = request.document.clone();
        let new_proposal = NewProposal::try_from(request)
            .map_err(|violation| ProposalError::validation_failed(vec![violation]))?;
        let proposal = self
            .store
            .save(new_proposal)
            .await
            .map_err(|e| ProposalError::from_save_failure(&document, e))?;

        info!(proposal_id = %proposal.id, "Proposal created");
        Ok(ProposalCreated {
            id: proposal.id,
            created_at: proposal.created_at,
        })
    }
}
