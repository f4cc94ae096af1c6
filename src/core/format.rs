//! # Number Text
//!
//! Operands are kept as text, so the engine needs two conversions:
//!
//! - [`format_number`]: `f64` → grouped decimal (`1,234.5`), at most
//!   [`MAX_FRACTION_DIGITS`] fractional digits, never exponent notation.
//! - [`parse_operand`]: text → `f64`, reading the longest numeric prefix the
//!   way a lenient float parser does (`"12("` is 12, `"Error"` is nothing).
//!   Group separators are skipped so formatted results read back intact.

/// Upper bound on fractional digits in a formatted result.
pub const MAX_FRACTION_DIGITS: usize = 10;

const GROUP_SEPARATOR: char = ',';

/// Formats a computed result for display.
///
/// Rounds to [`MAX_FRACTION_DIGITS`], drops trailing fractional zeros and
/// groups the integer part in threes. A value that rounds to zero is printed
/// without a sign.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "∞" } else { "-∞" });
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Reads an operand as a finite number.
///
/// Returns `None` when no numeric prefix exists (`"Error"`, `"NaN"`, `"("`)
/// or the value is not finite.
pub fn parse_operand(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim_start()
        .chars()
        .filter(|c| *c != GROUP_SEPARATOR)
        .collect();
    let len = numeric_prefix_len(cleaned.as_bytes());
    if len == 0 {
        return None;
    }
    cleaned[..len].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` literal, 0 if none.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers_are_grouped() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(-1234567.0), "-1,234,567");
    }

    #[test]
    fn test_format_caps_fraction_digits() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(2.0_f64.sqrt()), "1.4142135624");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_format_never_uses_exponent() {
        assert_eq!(format_number(1e21), "1,000,000,000,000,000,000,000");
        assert_eq!(format_number(1e-12), "0");
    }

    #[test]
    fn test_format_drops_sign_of_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1e-15), "0");
    }

    #[test]
    fn test_format_grouped_round_trip() {
        let value = 1234567.0123456789;
        let text = format_number(value);
        assert!(text.contains(','));
        let fraction = text.split_once('.').map(|(_, f)| f.len()).unwrap_or(0);
        assert!(fraction <= MAX_FRACTION_DIGITS);

        let reparsed: f64 = text.replace(',', "").parse().unwrap();
        assert!((reparsed - value).abs() < 1e-10);
        assert_eq!(parse_operand(&text), Some(reparsed));
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("-3.5"), Some(-3.5));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("1e3"), Some(1000.0));
        assert_eq!(parse_operand("1,234.5"), Some(1234.5));
    }

    #[test]
    fn test_parse_reads_longest_prefix() {
        assert_eq!(parse_operand("12(3"), Some(12.0));
        assert_eq!(parse_operand("7)"), Some(7.0));
        assert_eq!(parse_operand("2e"), Some(2.0));
        assert_eq!(parse_operand("3.1.4"), Some(3.1));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("Error"), None);
        assert_eq!(parse_operand("Erro"), None);
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand("(2"), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("1e999"), None);
    }
}
