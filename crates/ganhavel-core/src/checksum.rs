//! # Modulo-11 Check Digits
//!
//! Check-digit computation for CPF (individual) and CNPJ (company) numbers.
//! Both append two digits derived from weighted sums of the preceding
//! digits; they differ in weights and in how the remainder maps to a digit.
//!
//! All functions here take digit *values* (`0..=9`), not ASCII bytes.

/// CNPJ weights for the first check digit (over 12 base digits).
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights for the second check digit (over 12 base digits + first check).
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute the two CPF check digits for a 9-digit base.
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = cpf_digit(base);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    let second = cpf_digit(&extended);

    [first, second]
}

/// Compute the two CNPJ check digits for a 12-digit base.
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = cnpj_digit(base, &CNPJ_FIRST_WEIGHTS);

    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    let second = cnpj_digit(&extended, &CNPJ_SECOND_WEIGHTS);

    [first, second]
}

/// One CPF check digit: weights descend from `len + 1` to 2, then
/// `(sum * 10) mod 11` with 10 folded to 0.
fn cpf_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

/// One CNPJ check digit: remainders below 2 map to 0, otherwise `11 - r`.
fn cnpj_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_known_bases() {
        assert_eq!(cpf_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
        assert_eq!(cpf_check_digits(&[1, 5, 3, 5, 0, 9, 4, 6, 0]), [5, 6]);
        assert_eq!(cpf_check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), [3, 5]);
    }

    #[test]
    fn cpf_remainder_ten_folds_to_zero() {
        // 000000001 -> sum 2, (2 * 10) % 11 = 9; second digit over
        // 0000000019 -> sum 3 + 18 = 21, (21 * 10) % 11 = 1.
        assert_eq!(cpf_check_digits(&[0, 0, 0, 0, 0, 0, 0, 0, 1]), [9, 1]);
        // 000000005 -> sum 10, (10 * 10) % 11 = 1.
        assert_eq!(cpf_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 5]), 1);
        // 000000006 -> sum 12, 120 % 11 = 10 -> 0.
        assert_eq!(cpf_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 6]), 0);
    }

    #[test]
    fn cnpj_known_base() {
        assert_eq!(
            cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]),
            [8, 1]
        );
    }

    #[test]
    fn cnpj_low_remainder_maps_to_zero() {
        // Sum 11 -> remainder 0.
        assert_eq!(
            cnpj_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 4], &CNPJ_FIRST_WEIGHTS),
            0
        );
        // Sum 12 -> remainder 1.
        assert_eq!(
            cnpj_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6], &CNPJ_FIRST_WEIGHTS),
            0
        );
        // Sum 13 -> remainder 2 -> 9.
        assert_eq!(
            cnpj_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 2], &CNPJ_FIRST_WEIGHTS),
            9
        );
    }
}
