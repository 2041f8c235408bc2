//! Proposal Domain
//!
//! This crate owns the creation of financial proposals: a request carrying a
//! holder's name, national document, email, address and salary is checked,
//! persisted exactly once per document, and answered with either the stored
//! identifier or a field-annotated error.
//!
//! # Creation Pipeline
//!
//! ```text
//! ErrorHandler::intercept(
//!     CreateProposalWorkflow::create(
//!         ProposalStore::exists_by_document
//!         -> ProposalValidator + DocumentValidator
//!         -> ProposalStore::save
//!     )
//! ) -> Result<ProposalCreated, ErrorOutcome>
//! ```
//!
//! - **DocumentValidator**: CPF *or* CNPJ, reported as a single violation
//! - **ProposalValidator**: every remaining field rule, no short-circuit
//! - **CreateProposalWorkflow**: uniqueness, validation, persistence
//! - **ErrorHandler**: turns any failure into an [`ErrorOutcome`]
//!
//! # Examples
//!
//! ```rust
//! use domain_proposal::DocumentValidator;
//!
//! assert!(DocumentValidator::validate("529.982.247-25").is_ok());
//! assert!(DocumentValidator::validate("11.222.333/0001-81").is_ok());
//!
//! let violation = DocumentValidator::validate("123").unwrap_err();
//! assert_eq!(violation.field, "document");
//! ```

pub mod proposal;
pub mod document;
pub mod validation;
pub mod error;
pub mod error_handler;
pub mod ports;
pub mod workflow;
pub mod adapters;

pub use proposal::{CreateProposalRequest, NewProposal, Proposal};
pub use document::{AnyOf, Constraint, DocumentValidator, CNPJ, CPF};
pub use validation::{ProposalValidator, ValidationResult, Violation};
pub use error::ProposalError;
pub use error_handler::{ErrorHandler, ErrorKind, ErrorOutcome};
pub use ports::ProposalStore;
pub use workflow::{CreateProposalWorkflow, ProposalCreated};
pub use adapters::InMemoryProposalStore;
