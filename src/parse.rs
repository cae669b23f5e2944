//! Permissive parsing of free-form numeric input.
//!
//! The calculator is re-run on every keystroke, so a half-typed or malformed number must never
//! fail. Anything that does not start like a number reads as zero.

/// Parse the longest leading decimal literal, ignoring any trailing garbage.
///
/// `"0.30p"` reads as `0.30`, `"  7 hours"` reads as `7.0`, and `"abc"`, `""`, `"-"` or
/// an overflowing exponent all read as `0.0`.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let prefix = &text[..number_prefix_len(text)];
    prefix.parse::<f64>().ok().filter(|value| value.is_finite()).unwrap_or(0.0)
}

/// Parse a leading integer count.
///
/// Negative and empty input reads as zero, counts past [`u32::MAX`] saturate.
#[must_use]
pub fn parse_count(text: &str) -> u32 {
    let text = text.trim_start();
    let digits_start = usize::from(text.starts_with('+'));
    let digits_len = text[digits_start..].bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }
    text[digits_start..digits_start + digits_len].parse().unwrap_or(u32::MAX)
}

/// Length in bytes of the leading `[+-]digits[.digits][e[+-]digits]` literal.
fn number_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut position = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        position += 1;
    }
    let integer_digits = count_digits(&bytes[position..]);
    position += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(position) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[position + 1..]);
        if integer_digits + fraction_digits != 0 {
            position += 1 + fraction_digits;
        }
    }
    if integer_digits + fraction_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(position), Some(b'e' | b'E')) {
        let mut exponent = position + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent..]);
        if exponent_digits != 0 {
            position = exponent + exponent_digits;
        }
    }

    position
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
