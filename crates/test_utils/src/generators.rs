//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating documents and request fields.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_proposal::document::{cnpj, cpf};

fn render(digits: impl Iterator<Item = u32>) -> String {
    digits.filter_map(|d| char::from_digit(d, 10)).collect()
}

/// Strategy for bare 11-digit CPFs with correct check digits
pub fn valid_cpf_strategy() -> impl Strategy<Value = String> {
    prop::array::uniform9(0u32..10)
        .prop_filter("repeated digits", |base| base.iter().any(|d| *d != base[0]))
        .prop_map(|base| render(base.into_iter().chain(cpf::check_digits(&base))))
}

/// Strategy for bare 14-digit CNPJs with correct check digits
pub fn valid_cnpj_strategy() -> impl Strategy<Value = String> {
    prop::array::uniform12(0u32..10)
        .prop_filter("repeated digits", |base| base.iter().any(|d| *d != base[0]))
        .prop_map(|base| render(base.into_iter().chain(cnpj::check_digits(&base))))
}

/// Strategy for valid CPFs in `###.###.###-##` form
pub fn formatted_cpf_strategy() -> impl Strategy<Value = String> {
    valid_cpf_strategy().prop_map(|d| {
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    })
}

/// Strategy for valid CNPJs in `##.###.###/####-##` form
pub fn formatted_cnpj_strategy() -> impl Strategy<Value = String> {
    valid_cnpj_strategy().prop_map(|d| {
        format!("{}.{}.{}/{}-{}", &d[0..2], &d[2..5], &d[5..8], &d[8..12], &d[12..14])
    })
}

/// Strategy for any valid document, formatted or bare
pub fn valid_document_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        valid_cpf_strategy(),
        valid_cnpj_strategy(),
        formatted_cpf_strategy(),
        formatted_cnpj_strategy(),
    ]
}

/// Strategy for digit strings whose length fits neither format
pub fn wrong_length_document_strategy() -> impl Strategy<Value = String> {
    "[0-9]{0,10}|[0-9]{12,13}|[0-9]{15,20}"
}

/// Strategy for empty or whitespace-only strings
pub fn blank_string_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,5}"
}

/// Strategy for non-blank strings without an `@`
pub fn malformed_email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}(\\.[a-z]{2,5})?"
}

/// Strategy for salaries that satisfy the non-negative rule
pub fn valid_salary_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for strictly negative salaries
pub fn negative_salary_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000).prop_map(|cents| Decimal::new(-cents, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_proposal::DocumentValidator;

    proptest! {
        #[test]
        fn generated_documents_are_valid(document in valid_document_strategy()) {
            prop_assert!(DocumentValidator::validate(&document).is_ok());
        }

        #[test]
        fn wrong_length_documents_are_invalid(document in wrong_length_document_strategy()) {
            prop_assert!(DocumentValidator::validate(&document).is_err());
        }

        #[test]
        fn blank_strings_are_blank(value in blank_string_strategy()) {
            prop_assert!(value.trim().is_empty());
        }

        #[test]
        fn negative_salaries_are_negative(salary in negative_salary_strategy()) {
            prop_assert!(salary < Decimal::ZERO);
        }
    }
}
