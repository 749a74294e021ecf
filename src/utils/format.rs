// src/utils/format.rs

/// Marker printed in table cells for missing values.
pub const ABSENT: &str = "None";
/// Marker printed in the summary block for ratios that could not be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Truncates toward zero and inserts thousands separators.
///
/// `None` and non-finite inputs stay `None` so callers decide how to show
/// the gap.
pub fn format_number(value: Option<f64>) -> Option<String> {
    let value = value?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(group_thousands(truncated as i64))
}

/// Fixed-point rendering with `decimals` digits after the point.
pub fn format_fixed(value: Option<f64>, decimals: usize) -> Option<String> {
    value
        .filter(|v| v.is_finite())
        .map(|v| format!("{:.*}", decimals, v))
}

/// Renders an optional cell, falling back to the absent marker.
pub fn or_absent(cell: Option<String>) -> String {
    cell.unwrap_or_else(|| ABSENT.to_string())
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(Some(1234567.0)).as_deref(), Some("1,234,567"));
        assert_eq!(format_number(Some(999.0)).as_deref(), Some("999"));
        assert_eq!(format_number(Some(1000.0)).as_deref(), Some("1,000"));
        assert_eq!(format_number(Some(0.0)).as_deref(), Some("0"));
    }

    #[test]
    fn test_format_number_truncates_toward_zero() {
        assert_eq!(format_number(Some(1234.99)).as_deref(), Some("1,234"));
        assert_eq!(format_number(Some(-1234567.8)).as_deref(), Some("-1,234,567"));
        assert_eq!(format_number(Some(-0.5)).as_deref(), Some("0"));
    }

    #[test]
    fn test_format_number_passes_absent_through() {
        assert_eq!(format_number(None), None);
        assert_eq!(format_number(Some(f64::NAN)), None);
        assert_eq!(format_number(Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(Some(100.0), 1).as_deref(), Some("100.0"));
        assert_eq!(format_fixed(Some(2.0), 2).as_deref(), Some("2.00"));
        assert_eq!(format_fixed(Some(12.345678), 2).as_deref(), Some("12.35"));
        assert_eq!(format_fixed(None, 1), None);
    }

    #[test]
    fn test_or_absent() {
        assert_eq!(or_absent(None), "None");
        assert_eq!(or_absent(Some("1,000".into())), "1,000");
    }
}
