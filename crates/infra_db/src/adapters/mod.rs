//! Domain Adapters
//!
//! Implementations of domain ports backed by PostgreSQL. Each adapter
//! implements the port trait, converts rows to domain types and translates
//! `DatabaseError` into `PortError`.

pub mod proposal;

pub use proposal::PostgresProposalStore;
