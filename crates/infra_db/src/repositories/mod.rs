//! Repository implementations
//!
//! Repositories own the SQL and map between database rows and plain row
//! structs; adapters turn those rows into domain types.

pub mod proposal;

pub use proposal::{NewProposalRow, ProposalRepository, ProposalRow};
