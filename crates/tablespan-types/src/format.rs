//! Megabyte string formatting for the output document.
//!
//! The report emits sizes as fixed-point decimal strings with exactly
//! three fractional digits and thousands separators (`"12,345.678"`).
//! The flattener parses these strings back; both directions live here so
//! the format has a single owner.

/// Formats a non-negative megabyte value as `1,234.567`.
#[must_use]
pub fn format_mb(value: f64) -> String {
    let fixed = format!("{value:.3}");
    // "{:.3}" always yields a '.' followed by exactly three digits.
    let (int_part, frac_part) = fixed.split_at(fixed.len() - 4);

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(frac_part);
    out
}

/// Parses a formatted megabyte string back to a number.
///
/// Separator commas are stripped first. Malformed or empty input parses
/// as zero; the flattener tolerates bad cells instead of aborting a
/// whole summary.
#[must_use]
pub fn parse_mb(value: &str) -> f64 {
    value.trim().replace(',', "").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small() {
        assert_eq!(format_mb(0.0), "0.000");
        assert_eq!(format_mb(1.0), "1.000");
        assert_eq!(format_mb(0.083_333), "0.083");
        assert_eq!(format_mb(999.9994), "999.999");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_mb(1_234.5), "1,234.500");
        assert_eq!(format_mb(12_345.678), "12,345.678");
        assert_eq!(format_mb(1_234_567.891), "1,234,567.891");
    }

    #[test]
    fn test_format_rounds() {
        assert_eq!(format_mb(0.0836), "0.084");
        assert_eq!(format_mb(999.9996), "1,000.000");
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!(parse_mb("12,345.678"), 12_345.678);
        assert_eq!(parse_mb("0.083"), 0.083);
        assert_eq!(parse_mb(" 1,000.000 "), 1000.0);
    }

    #[test]
    fn test_parse_tolerates_garbage() {
        assert_eq!(parse_mb(""), 0.0);
        assert_eq!(parse_mb("n/a"), 0.0);
        assert_eq!(parse_mb("12,34,56abc"), 0.0);
    }
}
