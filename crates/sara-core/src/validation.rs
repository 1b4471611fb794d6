//! Field validators for the check-in forms.
//!
//! Every validator here is a total predicate over `&str`: any input, including
//! empty strings and garbage punctuation, yields `true` or `false`. Choosing
//! the message shown to the user is the job of [`crate::form`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::digits::digit_values;

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Minimum password length accepted by [`is_valid_password`].
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Loose email shape: `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns `true` if `email` has the shape `local@domain.tld`.
///
/// This is a shape check only. It does not attempt RFC 5322 conformance and
/// says nothing about deliverability.
///
/// # Examples
///
/// ```
/// use sara_core::validation::is_valid_email;
///
/// assert!(is_valid_email("maria@example.com.br"));
/// assert!(!is_valid_email("maria@example"));
/// assert!(!is_valid_email("maria silva@example.com"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns `true` if `password` is at least [`MIN_PASSWORD_LENGTH`] characters.
///
/// Length is counted in Unicode scalar values. There is no complexity rule.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    meets_min_length(password, MIN_PASSWORD_LENGTH)
}

/// Returns `true` if `value` has at least `min` characters.
#[must_use]
pub fn meets_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Returns `true` if `value` has something other than surrounding whitespace.
#[must_use]
pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns `true` if `cpf` is a structurally valid Brazilian CPF.
///
/// Punctuation is ignored: `529.982.247-25` and `52998224725` are the same
/// input. The digit stream must have exactly [`CPF_LENGTH`] digits, must not
/// be a single repeated digit, and both trailing check digits must match the
/// modulo-11 weighted sums of the digits before them.
///
/// # Examples
///
/// ```
/// use sara_core::validation::is_valid_cpf;
///
/// assert!(is_valid_cpf("529.982.247-25"));
/// assert!(!is_valid_cpf("529.982.247-26"));
/// assert!(!is_valid_cpf("111.111.111-11"));
/// ```
#[must_use]
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits = digit_values(cpf);

    if digits.len() != CPF_LENGTH {
        return false;
    }

    // Repeated sequences satisfy the arithmetic but are never issued.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// Computes the CPF check digit for `prefix`.
///
/// Weights run from `top_weight` down to 2, one per digit, so `top_weight`
/// is `prefix.len() + 1`.
fn check_digit(prefix: &[u32], top_weight: u32) -> u32 {
    let sum: u32 = prefix
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        remainder => remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CPFS: [&str; 4] = ["52998224725", "11144477735", "12345678909", "39053344705"];

    #[test]
    fn test_email_accepts_simple_addresses() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("joao.silva@defesacivil.sp.gov.br"));
        assert!(is_valid_email("user+tag@example.com"));
    }

    #[test]
    fn test_email_rejects_bad_shapes() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com\n"));
        assert!(!is_valid_email("user@example."));
    }

    #[test]
    fn test_email_is_loose() {
        // No TLD or label rules beyond the shape.
        assert!(is_valid_email("x@y.1"));
        assert!(is_valid_email("a@b.c.d.e"));
        assert!(is_valid_email("a@.b.c"));
    }

    #[test]
    fn test_password_boundary() {
        assert!(!is_valid_password(""));
        assert!(!is_valid_password("1234567"));
        assert!(is_valid_password("12345678"));
        assert!(is_valid_password("a much longer passphrase"));
    }

    #[test]
    fn test_password_counts_characters_not_bytes() {
        // 7 characters, 14 bytes.
        assert!(!is_valid_password("ççççççç"));
        assert!(is_valid_password("çççççççç"));
    }

    #[test]
    fn test_meets_min_length() {
        assert!(meets_min_length("abc", 3));
        assert!(!meets_min_length("ab", 3));
        assert!(meets_min_length("", 0));
    }

    #[test]
    fn test_required() {
        assert!(!is_required(""));
        assert!(!is_required("   "));
        assert!(!is_required("\t\n "));
        assert!(is_required("  x "));
        assert!(is_required("Rua das Flores, 10"));
    }

    #[test]
    fn test_cpf_known_valid() {
        for cpf in VALID_CPFS {
            assert!(is_valid_cpf(cpf), "{cpf} should be valid");
        }
    }

    #[test]
    fn test_cpf_ignores_punctuation() {
        assert!(is_valid_cpf("529.982.247-25"));
        assert!(is_valid_cpf(" 529 982 247 25 "));
        assert!(is_valid_cpf("cpf: 529-982-247/25"));
    }

    #[test]
    fn test_cpf_rejects_repeated_digits() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!is_valid_cpf(&cpf), "{cpf} should be rejected");
        }
    }

    #[test]
    fn test_cpf_rejects_wrong_length() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
        assert!(!is_valid_cpf("529.982.247-2"));
    }

    #[test]
    fn test_cpf_rejects_wrong_check_digits() {
        assert!(!is_valid_cpf("52998224715"));
        assert!(!is_valid_cpf("52998224726"));
        assert!(!is_valid_cpf("12345678900"));
    }

    #[test]
    fn test_cpf_single_digit_mutations_are_almost_always_detected() {
        let mut total = 0_u32;
        let mut undetected = 0_u32;

        for cpf in VALID_CPFS {
            let original = digit_values(cpf);
            for pos in 0..CPF_LENGTH {
                for replacement in (0..=9).filter(|&r| r != original[pos]) {
                    let mutated: String = original
                        .iter()
                        .enumerate()
                        .map(|(i, &d)| if i == pos { replacement } else { d })
                        .map(|d| char::from_digit(d, 10).unwrap())
                        .collect();
                    total += 1;
                    if is_valid_cpf(&mutated) {
                        undetected += 1;
                    }
                }
            }
        }

        // Remainders 10 and 0 both map to check digit 0, so a handful of
        // mutations collide. They must stay under 1%.
        assert!(undetected * 100 < total, "{undetected} of {total} mutations undetected");
    }

    #[test]
    fn test_cpf_check_digit_change_is_always_caught() {
        // Changing either check digit alone is always caught.
        assert!(!is_valid_cpf("52998224705"));
        assert!(!is_valid_cpf("52998224724"));
    }

    #[test]
    fn test_check_digits_of_known_cpf() {
        let digits = digit_values("52998224725");
        assert_eq!(check_digit(&digits[..9], 10), 2);
        assert_eq!(check_digit(&digits[..10], 11), 5);
    }

    #[test]
    fn test_check_digit_remainder_ten_maps_to_zero() {
        let prefix = (0..100_000_u32)
            .map(|n| digit_values(&format!("{n:09}")))
            .find(|p| {
                let sum: u32 = p.iter().zip((2..=10).rev()).map(|(d, w)| d * w).sum();
                (sum * 10) % 11 == 10
            })
            .unwrap();
        assert_eq!(check_digit(&prefix, 10), 0);
    }
}
