//! Core Kernel - Foundational types for the proposal service
//!
//! This crate provides the building blocks shared by the domain, database and
//! API layers:
//! - Strongly-typed identifiers
//! - The port error type every adapter speaks
//! - Adapter health reporting

pub mod identifiers;
pub mod ports;

pub use identifiers::ProposalId;
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
