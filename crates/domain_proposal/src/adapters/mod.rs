//! Store adapters living in the domain crate
//!
//! The in-memory store needs nothing but tokio, so it ships with the domain
//! and is used by local runs and tests. The PostgreSQL adapter lives in
//! `infra_db`.

pub mod memory;

pub use memory::InMemoryProposalStore;
