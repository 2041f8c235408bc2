//! Proposal entity and creation request
//!
//! A `CreateProposalRequest` is the raw, unchecked input of one creation call.
//! Once it passes validation it becomes a `NewProposal`, which the store turns
//! into a persisted `Proposal` by assigning the identifier and creation time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::ProposalId;

use crate::validation::{Violation, NOT_NULL_MESSAGE};

/// Input of a single proposal creation call
///
/// Nothing here is trusted: blank strings, malformed documents and negative
/// salaries are all representable and are reported by the validators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateProposalRequest {
    /// Holder name
    pub name: String,
    /// National identifier (CPF or CNPJ, formatted or bare digits)
    pub document: String,
    /// Contact email
    pub email: String,
    /// Postal address
    pub address: String,
    /// Declared salary; `None` when the caller did not send one
    pub salary: Option<Decimal>,
}

impl CreateProposalRequest {
    /// Creates a request with every field present
    pub fn new(
        name: impl Into<String>,
        document: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        salary: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
            email: email.into(),
            address: address.into(),
            salary: Some(salary),
        }
    }
}

/// A validated proposal that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProposal {
    pub name: String,
    pub document: String,
    pub email: String,
    pub address: String,
    pub salary: Decimal,
}

impl TryFrom<CreateProposalRequest> for NewProposal {
    type Error = Violation;

    /// Builds the persistable form of a request
    ///
    /// Only presence is checked here; the remaining rules belong to the
    /// validators, which run before this conversion.
    fn try_from(request: CreateProposalRequest) -> Result<Self, Self::Error> {
        let salary = request
            .salary
            .ok_or_else(|| Violation::new("salary", NOT_NULL_MESSAGE))?;

        Ok(Self {
            name: request.name,
            document: request.document,
            email: request.email,
            address: request.address,
            salary,
        })
    }
}

impl NewProposal {
    /// Attaches the store-assigned identity
    pub fn into_proposal(self, id: ProposalId, created_at: DateTime<Utc>) -> Proposal {
        Proposal {
            id,
            name: self.name,
            document: self.document,
            email: self.email,
            address: self.address,
            salary: self.salary,
            created_at,
        }
    }
}

/// A persisted proposal
///
/// `document` is unique across all proposals and `created_at` never changes
/// after the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub name: String,
    pub document: String,
    pub email: String,
    pub address: String,
    pub salary: Decimal,
    pub created_at: DateTime<Utc>,
}
