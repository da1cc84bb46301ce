/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace and a single `+` or `-` sign are accepted, followed by
/// digits, an optional fractional part and an optional exponent. An exponent
/// marker is only consumed when digits follow it. Parsing stops at the first
/// character that does not fit, and a string without any numeric prefix is
/// `0.0`.
///
/// A `0x` or `0X` prefix followed by a hex digit switches to hexadecimal:
/// hex digits, an optional hex fraction and an optional binary exponent
/// `p[+-]digits`, so `0x1p3` is `8`. `inf` and `nan` forms are not
/// recognized.
///
/// # Example
/// ```
/// use columna::util::num::parse_prefix;
///
/// assert_eq!(parse_prefix("12x3"), 12.0);
/// assert_eq!(parse_prefix("2.5e2kg"), 250.0);
/// assert_eq!(parse_prefix("3e"), 3.0);
/// assert_eq!(parse_prefix(".5"), 0.5);
/// assert_eq!(parse_prefix("abc"), 0.0);
/// assert_eq!(parse_prefix("0x10"), 16.0);
/// assert_eq!(parse_prefix("0x1p3"), 8.0);
/// assert_eq!(parse_prefix("0xg"), 0.0);
/// ```
#[must_use]
pub fn parse_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if (bytes[end..].starts_with(b"0x") || bytes[end..].starts_with(b"0X"))
       && let Some(value) = parse_hex(&bytes[end + 2..])
    {
        return if bytes.first() == Some(&b'-') { -value } else { value };
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    // The prefix is ASCII and matches Rust's float grammar.
    text[..end].parse().unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn hex_digit(byte: Option<&u8>) -> Option<u32> {
    byte.and_then(|b| char::from(*b).to_digit(16))
}

/// Parses hex digits with an optional fraction and binary exponent, the part
/// of a hexadecimal number after `0x`. Returns `None` without any hex digit.
fn parse_hex(bytes: &[u8]) -> Option<f64> {
    let mut value = 0.0;
    let mut digits = 0;
    let mut end = 0;

    while let Some(digit) = hex_digit(bytes.get(end)) {
        value = value * 16.0 + f64::from(digit);
        digits += 1;
        end += 1;
    }

    if bytes.get(end) == Some(&b'.') {
        let mut scale = 1.0 / 16.0;
        let mut fraction_end = end + 1;
        while let Some(digit) = hex_digit(bytes.get(fraction_end)) {
            value += f64::from(digit) * scale;
            scale /= 16.0;
            digits += 1;
            fraction_end += 1;
        }
        if digits > 0 {
            end = fraction_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'p' | b'P')) {
        let mut exponent_start = end + 1;
        let negative = bytes.get(exponent_start) == Some(&b'-');
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_start..]);
        if exponent_digits > 0 {
            let exponent = bytes[exponent_start..exponent_start + exponent_digits]
                .iter()
                .fold(0_i32, |acc, b| acc.saturating_mul(10).saturating_add(i32::from(b - b'0')));
            value *= 2.0_f64.powi(if negative { -exponent } else { exponent });
        }
    }

    Some(value)
}
