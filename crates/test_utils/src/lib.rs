//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! proposal service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known-valid documents and ready-made requests
//! - `builders`: Builder for creation requests
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Assertion helpers for error outcomes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
