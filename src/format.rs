/// Enough fractional digits to print any f64 without rounding.
const EXACT_DIGITS: usize = 1074;

/// Fixed-point formatting with `digits` decimals.
///
/// Rounds half away from zero on the exact binary value, so `0.125` becomes
/// `0.13` where `format!("{:.2}")` would give `0.12`. A negative value that
/// rounds to zero keeps its sign. Magnitudes of 1e21 and above are still
/// written out in full rather than switching to exponent notation.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .map_or(false, |&d| d >= b'5');
    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                int_len += 1;
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&b| b as char));
    }
    out
}

/// Longest leading decimal number in `raw`, or `default` when there is none.
///
/// Accepts an optional sign, digits with at most one decimal point and an
/// optional exponent. Trailing garbage is ignored (`"12km"` is 12). Negative
/// values are passed through.
pub fn parse_or_default(raw: &str, default: f64) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return default;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(value) if value.is_nan() || value == 0.0 => default,
        Ok(value) => value,
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pads_trailing_zeros() {
        assert_eq!(to_fixed(10.2, 2), "10.20");
        assert_eq!(to_fixed(1.5, 2), "1.50");
        assert_eq!(to_fixed(0.0, 1), "0.0");
        assert_eq!(to_fixed(100.0, 0), "100");
    }

    #[test]
    fn rounds_half_away_from_zero_on_exact_ties() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
    }

    #[test]
    fn uses_the_binary_value_not_the_literal() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(60.984, 1), "61.0");
    }

    #[test]
    fn carries_into_the_integer_part() {
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(99.96, 1), "100.0");
    }

    #[test]
    fn keeps_sign_of_small_negatives() {
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(-38.28, 2), "-38.28");
    }

    #[test]
    fn large_values_stay_positional() {
        assert_eq!(to_fixed(1e21, 0), "1000000000000000000000");
        assert_eq!(to_fixed(-1e21, 1), "-1000000000000000000000.0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 1), "-Infinity");
    }

    #[test]
    fn parses_leading_number() {
        assert_eq!(parse_or_default("20", 0.0), 20.0);
        assert_eq!(parse_or_default("  1.7", 0.0), 1.7);
        assert_eq!(parse_or_default("12km", 0.0), 12.0);
        assert_eq!(parse_or_default(".5", 0.0), 0.5);
        assert_eq!(parse_or_default("5.", 0.0), 5.0);
        assert_eq!(parse_or_default("1e2", 0.0), 100.0);
        assert_eq!(parse_or_default("3e", 0.0), 3.0);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(parse_or_default("", 0.0), 0.0);
        assert_eq!(parse_or_default("abc", 0.0), 0.0);
        assert_eq!(parse_or_default(".", 0.0), 0.0);
        assert_eq!(parse_or_default("-", 0.0), 0.0);
        assert_eq!(parse_or_default("0", 7.0), 7.0);
    }

    #[test]
    fn passes_negatives_through() {
        assert_eq!(parse_or_default("-4.5", 0.0), -4.5);
    }
}
