//! Test Data Builders
//!
//! Builders start from a request that passes every rule, so a test only
//! spells out the fields it is about.

use rust_decimal::Decimal;

use domain_proposal::CreateProposalRequest;

use crate::fixtures::RequestFixtures;

/// Builder for `CreateProposalRequest`
pub struct CreateProposalRequestBuilder {
    request: CreateProposalRequest,
}

impl Default for CreateProposalRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateProposalRequestBuilder {
    /// Creates a new builder with valid default values
    pub fn new() -> Self {
        Self {
            request: RequestFixtures::valid(),
        }
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    /// Sets the document
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.request.document = document.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.request.email = email.into();
        self
    }

    /// Sets the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.request.address = address.into();
        self
    }

    /// Sets the salary
    pub fn with_salary(mut self, salary: Decimal) -> Self {
        self.request.salary = Some(salary);
        self
    }

    /// Removes the salary
    pub fn without_salary(mut self) -> Self {
        self.request.salary = None;
        self
    }

    /// Builds the request
    pub fn build(self) -> CreateProposalRequest {
        self.request
    }
}
