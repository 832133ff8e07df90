//! Numeric literal parsing
//!
//! Turns an amount token such as `12.5k` into a value. A trailing letter is a
//! unit: `k`, `m` and `b` scale by a thousand, a million and a billion; any
//! other letter is dropped and scales by one.

/// Multiplier for a unit letter, case-insensitive
pub fn unit_multiplier(unit: char) -> Option<f64> {
    match unit.to_ascii_lowercase() {
        'k' => Some(1_000.0),
        'm' => Some(1_000_000.0),
        'b' => Some(1_000_000_000.0),
        _ => None,
    }
}

/// Parse an amount token into a value
///
/// Returns `None` when the digit portion is empty or not a number; callers
/// treat that as "no amount", never as an error.
///
/// ```
/// use ezmoney::parse::parse_amount;
/// assert_eq!(parse_amount("12.5k"), Some(12_500.0));
/// assert_eq!(parse_amount("3M"), Some(3_000_000.0));
/// assert_eq!(parse_amount("40"), Some(40.0));
/// assert_eq!(parse_amount("k"), None);
/// ```
pub fn parse_amount(token: &str) -> Option<f64> {
    let token = token.trim();
    let last = token.chars().last()?;

    let (number, multiplier) = if last.is_ascii_digit() || last == '.' {
        (token, 1.0)
    } else {
        let number = token[..token.len() - last.len_utf8()].trim();
        (number, unit_multiplier(last).unwrap_or(1.0))
    };

    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    number.parse::<f64>().ok().map(|value| value * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_amount("100"), Some(100.0));
        assert_eq!(parse_amount("5"), Some(5.0));
        assert_eq!(parse_amount("12.75"), Some(12.75));
    }

    #[test]
    fn test_units_scale_value() {
        for (n, value) in [("7", 7.0), ("12.5", 12.5), ("0.25", 0.25)] {
            for (unit, multiplier) in [
                ("", 1.0),
                ("k", 1_000.0),
                ("K", 1_000.0),
                ("m", 1_000_000.0),
                ("M", 1_000_000.0),
                ("b", 1_000_000_000.0),
                ("B", 1_000_000_000.0),
            ] {
                let token = format!("{}{}", n, unit);
                assert_eq!(parse_amount(&token), Some(value * multiplier), "token {}", token);
            }
        }
    }

    #[test]
    fn test_unknown_unit_is_ignored() {
        assert_eq!(parse_amount("12x"), Some(12.0));
        assert_eq!(parse_amount("3€"), Some(3.0));
    }

    #[test]
    fn test_space_before_unit() {
        assert_eq!(parse_amount("12 k"), Some(12_000.0));
    }

    #[test]
    fn test_no_value() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("k"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.2.3k"), None);
        assert_eq!(parse_amount("infk"), None);
    }

    #[test]
    fn test_unit_multiplier() {
        assert_eq!(unit_multiplier('K'), Some(1_000.0));
        assert_eq!(unit_multiplier('z'), None);
    }
}
