//! CNPJ (Cadastro Nacional da Pessoa Jurídica) - company registration number
//!
//! Fourteen digits, the last two being mod-11 check digits. Accepted
//! spellings follow `NN.NNN.NNN/NNNN-NN`, where each separator may be left
//! out, so fourteen bare digits and `NNNNNNNNNNNN-NN` are both valid.

use super::{extract_digits, is_repeated_sequence, mod11_check_digit};

const LENGTH: usize = 14;
const PATTERN: &str = "##.?###.?###/?####-?##";
const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes both check digits for the twelve-digit CNPJ base
pub fn check_digits(base: &[u32; 12]) -> [u32; 2] {
    let first = mod11_check_digit(base, &FIRST_WEIGHTS);
    let mut with_first = [0u32; 13];
    with_first[..12].copy_from_slice(base);
    with_first[12] = first;
    let second = mod11_check_digit(&with_first, &SECOND_WEIGHTS);
    [first, second]
}

/// Returns true if `value` is a structurally valid CNPJ with correct check digits
pub fn is_valid(value: &str) -> bool {
    let Some(digits) = extract_digits(value, LENGTH, PATTERN) else {
        return false;
    };
    if is_repeated_sequence(&digits) {
        return false;
    }

    let mut base = [0u32; 12];
    base.copy_from_slice(&digits[..12]);
    check_digits(&base) == [digits[12], digits[13]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cnpjs() {
        assert!(is_valid("11222333000181"));
        assert!(is_valid("11.222.333/0001-81"));
    }

    #[test]
    fn test_partially_separated_spellings_accepted() {
        assert!(is_valid("112223330001-81"));
        assert!(is_valid("11222333/0001-81"));
        assert!(is_valid("11.222.333/000181"));
        assert!(!is_valid("112223330001-82"));
    }

    #[test]
    fn test_wrong_check_digits() {
        assert!(!is_valid("11222333000182"));
        assert!(!is_valid("11222333000191"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        assert!(!is_valid("00000000000000"));
        assert!(!is_valid("11111111111111"));
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert!(!is_valid(""));
        assert!(!is_valid("1122233300018"));
        assert!(!is_valid("11.222.333.0001-81"));
        assert!(!is_valid("11-222-333/0001-81"));
        assert!(!is_valid("11.222.333/0001-81 "));
    }

    #[test]
    fn test_cpf_is_not_a_cnpj() {
        assert!(!is_valid("52998224725"));
    }

    #[test]
    fn test_check_digits() {
        assert_eq!(check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), [8, 1]);
    }
}
