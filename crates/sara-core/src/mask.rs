//! Incremental input masking for CPF and phone fields.
//!
//! The form calls the masker on every keystroke with the field's full current
//! text. The masker strips everything but digits and re-inserts punctuation
//! from scratch, so the output depends only on the digit stream. Nothing is
//! remembered between calls: the last accepted value is passed in by the
//! caller and is only used when the input overflows.
//!
//! # Overflow
//!
//! Once the digit stream grows past [`MAX_MASKED_DIGITS`], the new keystroke
//! is discarded and the previous value comes back unchanged. The field
//! freezes at its last accepted state; it is not truncated and no error is
//! raised.

use tracing::{debug, trace};

use crate::digits::digit_stream;
use crate::types::FieldKind;
use crate::validation::CPF_LENGTH;

/// Largest digit stream either mask accepts before freezing.
pub const MAX_MASKED_DIGITS: usize = 11;

/// Masks `current` for a field of the given `kind`.
///
/// CPF and phone fields are masked; every other kind passes `current` through
/// untouched. If the digit stream of `current` exceeds
/// [`MAX_MASKED_DIGITS`], `previous` is returned instead.
///
/// # Examples
///
/// ```
/// use sara_core::mask::mask_incremental;
/// use sara_core::FieldKind;
///
/// assert_eq!(mask_incremental(FieldKind::Cpf, "1234", ""), "123.4");
/// assert_eq!(mask_incremental(FieldKind::Phone, "11999998888", ""), "(11) 99999-8888");
///
/// // A 12th digit is ignored.
/// let full = "529.982.247-25";
/// assert_eq!(mask_incremental(FieldKind::Cpf, "529.982.247-251", full), full);
/// ```
#[must_use]
pub fn mask_incremental(kind: FieldKind, current: &str, previous: &str) -> String {
    match kind {
        FieldKind::Cpf => mask_cpf(current, previous),
        FieldKind::Phone => mask_phone(current, previous),
        FieldKind::Text | FieldKind::Email | FieldKind::Password => current.to_string(),
    }
}

/// Masks a CPF as `DDD.DDD.DDD-DD`, progressively for partial input.
///
/// A separator is only written once the digit after it exists, so four
/// digits read `123.4` and nine read `123.456.789`.
#[must_use]
pub fn mask_cpf(current: &str, previous: &str) -> String {
    let digits = digit_stream(current);
    if digits.len() > MAX_MASKED_DIGITS {
        debug!(digits = digits.len(), "CPF input overflow, keeping previous value");
        return previous.to_string();
    }

    let mut masked = String::with_capacity(digits.len() + 3);
    for (i, digit) in digits.chars().enumerate() {
        match i {
            3 | 6 => masked.push('.'),
            9 => masked.push('-'),
            _ => {}
        }
        masked.push(digit);
    }

    trace!(digits = digits.len(), "masked CPF input");
    masked
}

/// Masks a phone number as `(DD) DDDDD-DDDD`, progressively for partial input.
///
/// The area code is wrapped once a third digit is typed; up to two digits are
/// shown bare. The hyphen goes after the seventh digit once an eighth exists.
#[must_use]
pub fn mask_phone(current: &str, previous: &str) -> String {
    let digits = digit_stream(current);
    if digits.len() > MAX_MASKED_DIGITS {
        debug!(digits = digits.len(), "phone input overflow, keeping previous value");
        return previous.to_string();
    }

    if digits.len() <= 2 {
        return digits;
    }

    let mut masked = String::with_capacity(digits.len() + 4);
    masked.push('(');
    for (i, digit) in digits.chars().enumerate() {
        match i {
            2 => masked.push_str(") "),
            7 => masked.push('-'),
            _ => {}
        }
        masked.push(digit);
    }

    trace!(digits = digits.len(), "masked phone input");
    masked
}

/// Formats a CPF for display as `DDD.DDD.DDD-DD`.
///
/// Punctuation in `cpf` is ignored. When the digit stream has fewer than
/// eleven digits it is returned bare; digits past the eleventh are kept after
/// the formatted part.
///
/// # Examples
///
/// ```
/// use sara_core::mask::format_cpf;
///
/// assert_eq!(format_cpf("52998224725"), "529.982.247-25");
/// assert_eq!(format_cpf("529.982"), "529982");
/// ```
#[must_use]
pub fn format_cpf(cpf: &str) -> String {
    let digits = digit_stream(cpf);
    if digits.len() < CPF_LENGTH {
        return digits;
    }

    // Every byte is an ASCII digit, so byte offsets are char boundaries.
    format!(
        "{}.{}.{}-{}{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11],
        &digits[11..]
    )
}
