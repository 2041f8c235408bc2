//! National document validation
//!
//! A proposal document is either a CPF (individual, 11 digits) or a CNPJ
//! (organization, 14 digits). Each format is a standalone [`Constraint`]; the
//! [`DocumentValidator`] composes them with [`AnyOf`], so a document passes
//! when either format accepts it and fails with exactly one violation when
//! neither does.

pub mod cnpj;
pub mod cpf;

use crate::validation::Violation;

/// Message reported when a document is neither a CPF nor a CNPJ
pub const INVALID_DOCUMENT_MESSAGE: &str = "Document is not a valid: CPF or CNPJ";

/// Field name used in document violations
pub const DOCUMENT_FIELD: &str = "document";

/// CPF constraint (format A)
pub const CPF: Constraint = Constraint::new("CPF", cpf::is_valid);

/// CNPJ constraint (format B)
pub const CNPJ: Constraint = Constraint::new("CNPJ", cnpj::is_valid);

/// A named, pure predicate over a string value
#[derive(Debug, Clone, Copy)]
pub struct Constraint {
    name: &'static str,
    predicate: fn(&str) -> bool,
}

impl Constraint {
    /// Creates a constraint from a predicate
    pub const fn new(name: &'static str, predicate: fn(&str) -> bool) -> Self {
        Self { name, predicate }
    }

    /// Name of the constraint, for diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true when `value` satisfies the constraint
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

/// OR-composition of constraints reported as a single violation
///
/// Branch failures are never reported individually: if no constraint accepts
/// the value, the composite message is the only thing the caller sees.
#[derive(Debug, Clone, Copy)]
pub struct AnyOf {
    constraints: &'static [Constraint],
    message: &'static str,
}

impl AnyOf {
    /// Composes `constraints` under a single failure `message`
    pub const fn new(constraints: &'static [Constraint], message: &'static str) -> Self {
        Self { constraints, message }
    }

    /// Returns the first constraint that accepts `value`, if any
    pub fn matching(&self, value: &str) -> Option<&'static Constraint> {
        self.constraints.iter().find(|c| c.is_satisfied_by(value))
    }

    /// Checks `value`, attributing a failure to `field`
    pub fn check(&self, field: &str, value: &str) -> Result<(), Violation> {
        match self.matching(value) {
            Some(_) => Ok(()),
            None => Err(Violation::new(field, self.message)),
        }
    }
}

/// Validates proposal documents as CPF or CNPJ
pub struct DocumentValidator;

impl DocumentValidator {
    const RULE: AnyOf = AnyOf::new(&[CPF, CNPJ], INVALID_DOCUMENT_MESSAGE);

    /// Validates a document
    ///
    /// # Returns
    ///
    /// `Ok(())` if the document is a valid CPF or a valid CNPJ, otherwise one
    /// `Violation` on the `document` field
    pub fn validate(document: &str) -> Result<(), Violation> {
        Self::RULE.check(DOCUMENT_FIELD, document)
    }

    /// Names the format that accepted the document
    pub fn detect(document: &str) -> Option<&'static str> {
        Self::RULE.matching(document).map(Constraint::name)
    }
}

/// Extracts the digits of `value` when it is either `digit_count` bare digits
/// or follows `pattern`, where `#` stands for one digit, a character followed
/// by `?` is an optional separator and every other character must match
/// literally.
pub(crate) fn extract_digits(value: &str, digit_count: usize, pattern: &str) -> Option<Vec<u32>> {
    if value.len() == digit_count && value.bytes().all(|b| b.is_ascii_digit()) {
        return Some(value.chars().filter_map(|c| c.to_digit(10)).collect());
    }

    let mut digits = Vec::with_capacity(digit_count);
    let mut input = value.chars().peekable();
    let mut tokens = pattern.chars().peekable();
    while let Some(expected) = tokens.next() {
        let optional = tokens.next_if_eq(&'?').is_some();
        match (expected, input.peek().copied()) {
            ('#', Some(actual)) => {
                digits.push(actual.to_digit(10)?);
                input.next();
            }
            ('#', None) => return None,
            (literal, Some(actual)) if actual == literal => {
                input.next();
            }
            _ if optional => {}
            _ => return None,
        }
    }

    (input.next().is_none() && digits.len() == digit_count).then_some(digits)
}

/// Mod-11 check digit over `digits` with the given positional `weights`
pub(crate) fn mod11_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// True when every digit is the same, e.g. `00000000000`
pub(crate) fn is_repeated_sequence(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CPF: &str = "52998224725";
    const VALID_CNPJ: &str = "11222333000181";

    #[test]
    fn test_valid_cpf_passes() {
        assert!(DocumentValidator::validate(VALID_CPF).is_ok());
        assert_eq!(DocumentValidator::detect(VALID_CPF), Some("CPF"));
    }

    #[test]
    fn test_valid_cnpj_passes() {
        assert!(DocumentValidator::validate(VALID_CNPJ).is_ok());
        assert_eq!(DocumentValidator::detect(VALID_CNPJ), Some("CNPJ"));
    }

    #[test]
    fn test_invalid_document_reports_single_violation() {
        let violation = DocumentValidator::validate("123").unwrap_err();
        assert_eq!(violation.field, "document");
        assert_eq!(violation.message, INVALID_DOCUMENT_MESSAGE);
    }

    #[test]
    fn test_blank_document_is_invalid() {
        assert!(DocumentValidator::validate("").is_err());
        assert!(DocumentValidator::validate("   ").is_err());
    }

    #[test]
    fn test_any_of_uses_composite_message() {
        const NEVER: Constraint = Constraint::new("never", |_| false);
        const ALWAYS: Constraint = Constraint::new("always", |_| true);
        const FAILING: AnyOf = AnyOf::new(&[NEVER, NEVER], "nothing matched");
        const PASSING: AnyOf = AnyOf::new(&[NEVER, ALWAYS], "nothing matched");

        let violation = FAILING.check("field", "x").unwrap_err();
        assert_eq!(violation.field, "field");
        assert_eq!(violation.message, "nothing matched");

        assert!(PASSING.check("field", "x").is_ok());
        assert_eq!(PASSING.matching("x").map(Constraint::name), Some("always"));
    }

    #[test]
    fn test_extract_digits_bare_and_masked() {
        assert_eq!(extract_digits("123", 3, "#.##"), Some(vec![1, 2, 3]));
        assert_eq!(extract_digits("1.23", 3, "#.##"), Some(vec![1, 2, 3]));
        assert_eq!(extract_digits("1-23", 3, "#.##"), None);
        assert_eq!(extract_digits("12a", 3, "#.##"), None);
        assert_eq!(extract_digits("1.234", 3, "#.##"), None);
    }

    #[test]
    fn test_extract_digits_optional_separators() {
        assert_eq!(extract_digits("1.2-3", 3, "#.?#-##"), None);
        assert_eq!(extract_digits("1.2-34", 4, "#.?#-##"), Some(vec![1, 2, 3, 4]));
        assert_eq!(extract_digits("12-34", 4, "#.?#-##"), Some(vec![1, 2, 3, 4]));
        assert_eq!(extract_digits("1234", 4, "#.?#-##"), Some(vec![1, 2, 3, 4]));
        assert_eq!(extract_digits("12.34", 4, "#.?#-##"), None);
        assert_eq!(extract_digits("1..2-34", 4, "#.?#-##"), None);
    }

    #[test]
    fn test_mod11_low_remainder_is_zero() {
        // sum = 11 -> remainder 0
        assert_eq!(mod11_check_digit(&[1, 1], &[10, 1]), 0);
        // sum = 12 -> remainder 1
        assert_eq!(mod11_check_digit(&[1, 2], &[10, 1]), 0);
        // sum = 13 -> remainder 2
        assert_eq!(mod11_check_digit(&[1, 3], &[10, 1]), 9);
    }
}
