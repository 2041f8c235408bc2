//! Proposal Domain Ports
//!
//! The `ProposalStore` trait is everything the creation workflow needs from
//! persistence. Adapters:
//!
//! - **PostgreSQL**: `infra_db::PostgresProposalStore`
//! - **In-memory**: [`InMemoryProposalStore`](crate::InMemoryProposalStore)
//!
//! # Uniqueness
//!
//! `exists_by_document` is only a pre-check. Two concurrent calls may both see
//! `false`; the adapter's `save` is the real enforcement point and must fail
//! with `PortError::Conflict` when the document is already stored.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError, ProposalId};

use crate::proposal::{NewProposal, Proposal};

/// The port trait for proposal persistence
#[async_trait]
pub trait ProposalStore: DomainPort + HealthCheckable {
    /// Returns true if a proposal with this document is already stored
    async fn exists_by_document(&self, document: &str) -> Result<bool, PortError>;

    /// Persists a proposal, assigning its identifier and creation time
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if the document is already stored
    async fn save(&self, proposal: NewProposal) -> Result<Proposal, PortError>;

    /// Retrieves a proposal by ID
    async fn find_by_id(&self, id: ProposalId) -> Result<Option<Proposal>, PortError>;
}
