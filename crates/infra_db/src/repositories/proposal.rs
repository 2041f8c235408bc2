//! Proposal repository implementation
//!
//! Queries are checked at runtime (`query_as` with `FromRow`) so the crate
//! builds without a live database.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Database row for a stored proposal
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProposalRow {
    pub id: Uuid,
    pub name: String,
    pub document: String,
    pub email: String,
    pub address: String,
    pub salary: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Values for a proposal insert; `created_at` is assigned by the database
#[derive(Debug, Clone)]
pub struct NewProposalRow {
    pub id: Uuid,
    pub name: String,
    pub document: String,
    pub email: String,
    pub address: String,
    pub salary: Decimal,
}

/// Repository for the `proposals` table
#[derive(Debug, Clone)]
pub struct ProposalRepository {
    pool: PgPool,
}

impl ProposalRepository {
    /// Creates a new ProposalRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns true if a proposal with `document` exists
    pub async fn exists_by_document(&self, document: &str) -> Result<bool, DatabaseError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM proposals WHERE document = $1)",
        )
        .bind(document)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }

    /// Inserts a proposal and returns the stored row
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` if the document is already stored
    pub async fn insert(&self, proposal: NewProposalRow) -> Result<ProposalRow, DatabaseError> {
        debug!(proposal_id = %proposal.id, "Inserting proposal");

        sqlx::query_as::<_, ProposalRow>(
            r#"
            INSERT INTO proposals (id, name, document, email, address, salary)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, document, email, address, salary, created_at
            "#,
        )
        .bind(proposal.id)
        .bind(&proposal.name)
        .bind(&proposal.document)
        .bind(&proposal.email)
        .bind(&proposal.address)
        .bind(proposal.salary)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }

    /// Retrieves a proposal by identifier
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ProposalRow>, DatabaseError> {
        sqlx::query_as::<_, ProposalRow>(
            r#"
            SELECT id, name, document, email, address, salary, created_at
            FROM proposals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))
    }

    /// Number of stored proposals
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM proposals")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))
    }
}
