//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for proposals using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: `ProposalRepository` owns the SQL,
//! and `PostgresProposalStore` adapts it to the domain's `ProposalStore` port,
//! translating rows into domain types and `DatabaseError` into `PortError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresProposalStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/proposals")).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresProposalStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use repositories::ProposalRepository;
pub use adapters::PostgresProposalStore;
