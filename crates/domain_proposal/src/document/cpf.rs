//! CPF (Cadastro de Pessoas Físicas) - individual taxpayer number
//!
//! Eleven digits, the last two being mod-11 check digits. Accepted spellings
//! are eleven bare digits, or three groups of three digits with optional dots
//! followed by a dash and the check digits (`NNN.NNN.NNN-NN`, `NNNNNNNNN-NN`).

use super::{extract_digits, is_repeated_sequence, mod11_check_digit};

const LENGTH: usize = 11;
const PATTERN: &str = "###.?###.?###-##";
const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes both check digits for the nine-digit CPF base
pub fn check_digits(base: &[u32; 9]) -> [u32; 2] {
    let first = mod11_check_digit(base, &FIRST_WEIGHTS);
    let mut with_first = [0u32; 10];
    with_first[..9].copy_from_slice(base);
    with_first[9] = first;
    let second = mod11_check_digit(&with_first, &SECOND_WEIGHTS);
    [first, second]
}

/// Returns true if `value` is a structurally valid CPF with correct check digits
pub fn is_valid(value: &str) -> bool {
    let Some(digits) = extract_digits(value, LENGTH, PATTERN) else {
        return false;
    };
    if is_repeated_sequence(&digits) {
        return false;
    }

    let mut base = [0u32; 9];
    base.copy_from_slice(&digits[..9]);
    check_digits(&base) == [digits[9], digits[10]]
}
