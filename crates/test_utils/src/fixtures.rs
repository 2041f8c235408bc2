//! Pre-built Test Fixtures
//!
//! Known-valid documents and requests. These are consistent and predictable;
//! the `random_*` helpers use `fake` when a test only needs *some* valid data.

use fake::faker::address::en::{BuildingNumber, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_proposal::document::{cnpj, cpf};
use domain_proposal::CreateProposalRequest;

/// Fixture for national documents
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// A valid CPF, bare digits
    pub fn cpf() -> &'static str {
        "52998224725"
    }

    /// The same CPF with its mask
    pub fn cpf_formatted() -> &'static str {
        "529.982.247-25"
    }

    /// A second valid CPF, for tests that need two distinct documents
    pub fn other_cpf() -> &'static str {
        "11144477735"
    }

    /// A valid CNPJ, bare digits
    pub fn cnpj() -> &'static str {
        "11222333000181"
    }

    /// The same CNPJ with its mask
    pub fn cnpj_formatted() -> &'static str {
        "11.222.333/0001-81"
    }

    /// Every known-valid document, formatted and bare
    pub fn all_valid() -> &'static [&'static str] {
        &VALID_DOCUMENTS
    }

    /// Documents that are neither a CPF nor a CNPJ
    pub fn all_invalid() -> &'static [&'static str] {
        &INVALID_DOCUMENTS
    }

    /// A random CPF with correct check digits
    pub fn random_cpf() -> String {
        loop {
            let mut base = [0u32; 9];
            for digit in base.iter_mut() {
                *digit = (0u32..10).fake();
            }
            if base.iter().all(|d| *d == base[0]) {
                continue;
            }
            return digits_to_string(base.iter().chain(cpf::check_digits(&base).iter()));
        }
    }

    /// A random CNPJ with correct check digits
    pub fn random_cnpj() -> String {
        loop {
            let mut base = [0u32; 12];
            for digit in base.iter_mut() {
                *digit = (0u32..10).fake();
            }
            if base.iter().all(|d| *d == base[0]) {
                continue;
            }
            return digits_to_string(base.iter().chain(cnpj::check_digits(&base).iter()));
        }
    }
}

static VALID_DOCUMENTS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        DocumentFixtures::cpf(),
        DocumentFixtures::cpf_formatted(),
        DocumentFixtures::other_cpf(),
        "111.444.777-35",
        "529982247-25",
        DocumentFixtures::cnpj(),
        DocumentFixtures::cnpj_formatted(),
        "112223330001-81",
    ]
});

static INVALID_DOCUMENTS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "",
        "123",
        "52998224724",
        "00000000000",
        "11111111111111",
        "529.982.247/25",
        "11222333000180",
        "abcdefghijk",
    ]
});

fn digits_to_string<'a>(digits: impl Iterator<Item = &'a u32>) -> String {
    digits
        .filter_map(|d| char::from_digit(*d, 10))
        .collect()
}

/// Fixture for creation requests
pub struct RequestFixtures;

impl RequestFixtures {
    /// A request that passes every rule
    pub fn valid() -> CreateProposalRequest {
        CreateProposalRequest::new("Ana", DocumentFixtures::cpf(), "a@b.com", "St 1", dec!(1000))
    }

    /// A valid request for a specific document
    pub fn valid_with_document(document: &str) -> CreateProposalRequest {
        let mut request = Self::valid();
        request.document = document.to_string();
        request
    }

    /// A request breaking the name, email, address, salary and document rules
    pub fn invalid_everywhere() -> CreateProposalRequest {
        CreateProposalRequest {
            name: String::new(),
            document: "123".to_string(),
            email: "not-an-email".to_string(),
            address: String::new(),
            salary: Some(dec!(-5)),
        }
    }

    /// A valid request with randomized contents and a random CPF
    pub fn random_valid() -> CreateProposalRequest {
        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        let street: String = StreetName().fake();
        let number: String = BuildingNumber().fake();
        let cents: i64 = (0i64..10_000_000).fake();

        CreateProposalRequest::new(
            name,
            DocumentFixtures::random_cpf(),
            email,
            format!("{street}, {number}"),
            Decimal::new(cents, 2),
        )
    }
}
