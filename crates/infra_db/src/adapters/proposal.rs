//! PostgreSQL Proposal Store
//!
//! Implements `ProposalStore` on top of `ProposalRepository`. The identifier
//! is generated here (UUID v7); the creation timestamp comes from the
//! database so the returned value is exactly what was stored.
//!
//! Document uniqueness is enforced by the `proposals_document_key`
//! constraint. A violation surfaces as `PortError::Conflict`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError, ProposalId};
use domain_proposal::{NewProposal, Proposal, ProposalStore};

use crate::repositories::proposal::{NewProposalRow, ProposalRepository, ProposalRow};

const ADAPTER_ID: &str = "postgres-proposal-store";

/// PostgreSQL-backed implementation of `ProposalStore`
#[derive(Debug, Clone)]
pub struct PostgresProposalStore {
    repository: ProposalRepository,
}

impl PostgresProposalStore {
    /// Creates a new store over `pool`
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ProposalRepository::new(pool),
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &ProposalRepository {
        &self.repository
    }
}

impl DomainPort for PostgresProposalStore {}

#[async_trait]
impl HealthCheckable for PostgresProposalStore {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.repository.pool())
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ProposalStore for PostgresProposalStore {
    #[instrument(skip(self))]
    async fn exists_by_document(&self, document: &str) -> Result<bool, PortError> {
        Ok(self.repository.exists_by_document(document).await?)
    }

    #[instrument(skip(self, proposal), fields(document = %proposal.document))]
    async fn save(&self, proposal: NewProposal) -> Result<Proposal, PortError> {
        let row = NewProposalRow {
            id: *ProposalId::new_v7().as_uuid(),
            name: proposal.name,
            document: proposal.document,
            email: proposal.email,
            address: proposal.address,
            salary: proposal.salary,
        };

        let stored = self.repository.insert(row).await.map_err(|e| {
            if e.is_duplicate() {
                warn!("Document already stored");
            }
            PortError::from(e)
        })?;

        debug!(proposal_id = %stored.id, "Proposal stored");
        Ok(row_to_proposal(stored))
    }

    #[instrument(skip(self), fields(proposal_id = %id))]
    async fn find_by_id(&self, id: ProposalId) -> Result<Option<Proposal>, PortError> {
        let row = self.repository.get_by_id(*id.as_uuid()).await?;
        Ok(row.map(row_to_proposal))
    }
}

fn row_to_proposal(row: ProposalRow) -> Proposal {
    Proposal {
        id: ProposalId::from_uuid(row.id),
        name: row.name,
        document: row.document,
        email: row.email,
        address: row.address,
        salary: row.salary,
        created_at: row.created_at,
    }
}
