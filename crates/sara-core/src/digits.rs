//! Digit-stream extraction shared by the masker and the CPF validator.
//!
//! Every field that carries a document or phone number is normalized the
//! same way before anything else happens: all characters that are not ASCII
//! digits are dropped. Mask punctuation from an earlier pass, spaces, and
//! stray letters all disappear, so the rest of the crate only ever sees
//! `0`-`9`.

/// Returns the digit stream of `text`: every ASCII digit, in order.
///
/// # Examples
///
/// ```
/// use sara_core::digits::digit_stream;
///
/// assert_eq!(digit_stream("529.982.247-25"), "52998224725");
/// assert_eq!(digit_stream("(11) 9abc"), "119");
/// assert_eq!(digit_stream(""), "");
/// ```
#[must_use]
pub fn digit_stream(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Returns the numeric values of the digits in `text`.
///
/// Used by checksum code that needs arithmetic on each position.
#[must_use]
pub fn digit_values(text: &str) -> Vec<u32> {
    text.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Counts the digits in `text` without allocating.
#[must_use]
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}
