//! Input predicates shared by the selection model and the presentation layer.

/// Lower bound for a custom width or height, inclusive.
pub const MIN_DIMENSION: u32 = 100;
/// Upper bound for a custom width or height, inclusive.
pub const MAX_DIMENSION: u32 = 10_000;

/// True iff `s` is `#` followed by exactly 3 or 6 hex digits, in either case.
///
/// No normalization happens here: callers canonicalize after validating.
pub fn is_valid_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// True iff `n` is finite and within `[MIN_DIMENSION, MAX_DIMENSION]`.
pub fn is_valid_dimension(n: f64) -> bool {
    n.is_finite() && n >= MIN_DIMENSION as f64 && n <= MAX_DIMENSION as f64
}

/// Lenient integer parse for typed dimensions.
///
/// Leading whitespace is skipped and the leading run of digits (with an
/// optional sign) is read, so `"1200px"` yields `1200`. Text without leading
/// digits yields `None`.
pub fn parse_dimension(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    // Saturate absurdly long inputs; they fail range validation either way.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_long_and_short_hex() {
        for ok in ["#76d1ff", "#76D1FF", "#abc", "#ABC", "#000000", "#fFf"] {
            assert!(is_valid_color(ok), "{ok} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in [
            "", "#", "76d1ff", "#76d1f", "#76d1fff", "#ggg", "#12", "#1234", "notacolor",
            " #abc", "#abc ", "#ａｂｃ",
        ] {
            assert!(!is_valid_color(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn dimension_bounds_are_inclusive() {
        assert!(is_valid_dimension(100.0));
        assert!(is_valid_dimension(10_000.0));
        assert!(is_valid_dimension(1080.0));
        assert!(!is_valid_dimension(99.0));
        assert!(!is_valid_dimension(10_001.0));
        assert!(!is_valid_dimension(-1200.0));
        assert!(!is_valid_dimension(f64::NAN));
        assert!(!is_valid_dimension(f64::INFINITY));
    }

    #[test]
    fn dimension_predicate_matches_range_for_integers() {
        for n in (-50i64..=10_200).step_by(7) {
            let expected = (100..=10_000).contains(&n);
            assert_eq!(is_valid_dimension(n as f64), expected, "n = {n}");
        }
    }

    #[test]
    fn parse_dimension_reads_leading_digits() {
        assert_eq!(parse_dimension("1200"), Some(1200));
        assert_eq!(parse_dimension("  1600 "), Some(1600));
        assert_eq!(parse_dimension("1200px"), Some(1200));
        assert_eq!(parse_dimension("-5"), Some(-5));
        assert_eq!(parse_dimension("+300"), Some(300));
        assert_eq!(parse_dimension("12.9"), Some(12));
        assert_eq!(parse_dimension(""), None);
        assert_eq!(parse_dimension("px1200"), None);
        assert_eq!(parse_dimension("-"), None);
    }
}
