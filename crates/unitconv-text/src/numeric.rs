//! Numeric text canonicalization.
//!
//! Users type values the way they read them: with spaces (or non-breaking
//! spaces) as thousands separators and with trailing zeros after the decimal
//! point. The backend expects the shortest plain form, so input goes through
//! two steps, always in this order:
//!
//! 1. [`remove_whitespaces`] drops every whitespace character.
//! 2. [`remove_redundant_zeros`] trims zeros after the last decimal point.
//!
//! Both functions are total: they never fail and never validate.

/// Decimal point recognised by [`remove_redundant_zeros`].
pub const DECIMAL_POINT: char = '.';

/// Remove every whitespace character from a string.
///
/// Whitespace is anything [`char::is_whitespace`] accepts, which covers the
/// ASCII space as well as separators such as U+00A0 (no-break space),
/// U+2009 (thin space) and U+202F (narrow no-break space). The remaining
/// characters keep their relative order.
pub fn remove_whitespaces(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Trim redundant trailing zeros from a whitespace-free numeric string.
///
/// - Without a decimal point the input is returned unchanged.
/// - Otherwise zeros after the last decimal point are stripped, and the
///   point itself goes too once nothing follows it.
///
/// Digits before the last point are never touched, so `"0.0"` becomes
/// `"0"` and not an empty string. Earlier points in malformed input such as
/// `"1.2.30"` are left alone.
pub fn remove_redundant_zeros(value: &str) -> String {
    let Some(point) = value.rfind(DECIMAL_POINT) else {
        return value.to_string();
    };
    let integer = &value[..point];
    let fraction = value[point + DECIMAL_POINT.len_utf8()..].trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}{DECIMAL_POINT}{fraction}")
    }
}

/// Run the full pipeline: whitespace removal, then zero trimming.
pub fn canonicalize(value: &str) -> String {
    remove_redundant_zeros(&remove_whitespaces(value))
}

/// Check whether a string is already in canonical form.
pub fn is_canonical(value: &str) -> bool {
    canonicalize(value) == value
}

/// Every stage of canonicalizing one input, kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonicalization {
    /// The text as typed.
    pub raw: String,
    /// After whitespace removal.
    pub compact: String,
    /// After zero trimming.
    pub canonical: String,
}

impl Canonicalization {
    /// Canonicalize `value`, recording the intermediate form.
    pub fn of(value: &str) -> Self {
        let compact = remove_whitespaces(value);
        let canonical = remove_redundant_zeros(&compact);
        Self {
            raw: value.to_string(),
            compact,
            canonical,
        }
    }

    /// Whether any stage changed the input.
    pub fn changed(&self) -> bool {
        self.raw != self.canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_whitespaces_thousands() {
        assert_eq!(remove_whitespaces("1 000 000"), "1000000");
    }

    #[test]
    fn test_remove_whitespaces_unicode_separators() {
        assert_eq!(remove_whitespaces("1\u{a0}000"), "1000");
        assert_eq!(remove_whitespaces("2\u{202f}500\u{2009}000"), "2500000");
        assert_eq!(remove_whitespaces("\t 42 \n"), "42");
    }

    #[test]
    fn test_remove_whitespaces_empty() {
        assert_eq!(remove_whitespaces(""), "");
        assert_eq!(remove_whitespaces("   "), "");
    }

    #[test]
    fn test_integer_unchanged() {
        assert_eq!(remove_redundant_zeros("1000000"), "1000000");
        assert_eq!(remove_redundant_zeros("0"), "0");
        assert_eq!(remove_redundant_zeros(""), "");
    }

    #[test]
    fn test_trailing_zeros() {
        assert_eq!(remove_redundant_zeros("5.000"), "5");
        assert_eq!(remove_redundant_zeros("5.100"), "5.1");
        assert_eq!(remove_redundant_zeros("5.105"), "5.105");
        assert_eq!(remove_redundant_zeros("10.0"), "10");
    }

    #[test]
    fn test_zero_is_kept() {
        assert_eq!(remove_redundant_zeros("0.0"), "0");
        assert_eq!(remove_redundant_zeros("00.000"), "00");
        assert_eq!(remove_redundant_zeros("0."), "0");
    }

    #[test]
    fn test_bare_fraction() {
        assert_eq!(remove_redundant_zeros(".500"), ".5");
        assert_eq!(remove_redundant_zeros(".000"), "");
    }

    #[test]
    fn test_multiple_points_only_last_trimmed() {
        assert_eq!(remove_redundant_zeros("1.2.30"), "1.2.3");
        assert_eq!(remove_redundant_zeros("1.0.0"), "1.0");
    }

    #[test]
    fn test_non_numeric_passthrough() {
        assert_eq!(remove_redundant_zeros("abc"), "abc");
        assert_eq!(remove_redundant_zeros("1e10"), "1e10");
        assert_eq!(remove_redundant_zeros("x.y00"), "x.y");
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("1 000.000"), "1000");
        assert_eq!(canonicalize(" 3.14 0 "), "3.14");
        assert_eq!(canonicalize("1 000 000"), "1000000");
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("1000"));
        assert!(is_canonical("2.5"));
        assert!(!is_canonical("2.50"));
        assert!(!is_canonical("1 000"));
    }

    #[test]
    fn test_canonicalization_stages() {
        let stages = Canonicalization::of("1 250.500");
        assert_eq!(stages.compact, "1250.500");
        assert_eq!(stages.canonical, "1250.5");
        assert!(stages.changed());
        assert!(!Canonicalization::of("7").changed());
    }
}
