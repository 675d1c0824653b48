//! Luhn checksum validation for card numbers.
//!
//! Walks the number right to left, doubling every second digit and folding
//! two-digit products back to a single digit; a number passes when the
//! weighted sum is divisible by 10.

use serde::{Deserialize, Serialize};

/// Error for card numbers that cannot be checksummed at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum LuhnError {
    /// The input held no digits.
    #[error("card number is empty")]
    Empty,
    /// The input held something other than a decimal digit.
    #[error("card number contains a non-digit character: {0:?}")]
    NonDigit(char),
}

/// Weighted digit sum of `number`, walking right to left. `double_first`
/// selects whether the rightmost digit is doubled.
fn weighted_sum(number: &str, double_first: bool) -> Result<u32, LuhnError> {
    if number.is_empty() {
        return Err(LuhnError::Empty);
    }

    let mut sum = 0u32;
    let mut double = double_first;
    for c in number.chars().rev() {
        let digit = c.to_digit(10).ok_or(LuhnError::NonDigit(c))?;
        sum += if double {
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            digit
        };
        double = !double;
    }
    Ok(sum)
}

/// Validate a full card number, check digit included.
pub fn validate(number: &str) -> Result<bool, LuhnError> {
    Ok(weighted_sum(number, false)? % 10 == 0)
}

/// Compute the check digit that makes `payload` followed by that digit a
/// valid card number.
pub fn check_digit(payload: &str) -> Result<u8, LuhnError> {
    // The appended digit occupies the undoubled rightmost position, so the
    // payload's own rightmost digit is doubled.
    let sum = weighted_sum(payload, true)?;
    Ok(((10 - (sum % 10)) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_known_valid_numbers() {
        assert_eq!(validate("5061240240202002103058"), Ok(true));
        assert_eq!(validate("4242424242424242"), Ok(true));
    }

    #[test]
    fn rejects_a_wrong_check_digit() {
        assert_eq!(validate("5061240240202002103059"), Ok(false));
        assert_eq!(validate("4242424242424243"), Ok(false));
    }

    #[test]
    fn computes_the_check_digit() {
        assert_eq!(check_digit("506124024020200210305"), Ok(8));
        assert_eq!(check_digit("424242424242424"), Ok(2));
    }

    #[test]
    fn rejects_garbage_input() {
        assert_eq!(validate(""), Err(LuhnError::Empty));
        assert_eq!(validate("4242-4242"), Err(LuhnError::NonDigit('-')));
        assert_eq!(check_digit(""), Err(LuhnError::Empty));
    }

    proptest! {
        #[test]
        fn payload_plus_check_digit_validates(payload in "[0-9]{5,18}") {
            let digit = check_digit(&payload).unwrap();
            let number = format!("{payload}{digit}");
            prop_assert_eq!(validate(&number).unwrap(), true);
        }

        // Doubling-and-folding maps the ten digits to ten distinct residues,
        // so any single-digit change must break the checksum.
        #[test]
        fn any_single_digit_mutation_invalidates(
            payload in "[0-9]{5,18}",
            position in any::<prop::sample::Index>(),
            bump in 1u32..10,
        ) {
            let digit = check_digit(&payload).unwrap();
            let number = format!("{payload}{digit}");

            let mut digits = number.into_bytes();
            let at = position.index(digits.len());
            let old = u32::from(digits[at] - b'0');
            digits[at] = b'0' + ((old + bump) % 10) as u8;
            let mutated = String::from_utf8(digits).unwrap();

            prop_assert_eq!(validate(&mutated).unwrap(), false);
        }
    }
}
