//! Display formatting for dashboard figures.

/// Insert `,` every three digits into a run of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Currency amount with thousands separators and two decimals, e.g.
/// `format_currency(1234567.891, "₹") == "₹1,234,567.89"`.
///
/// The sign follows the symbol: `₹-1,500.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{symbol}{amount}");
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{symbol}{sign}{}.{fraction}", group_thousands(whole))
}

/// Integer count with thousands separators.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Rounded whole number with thousands separators, `"-"` when undefined.
pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => format_count(v.round() as u64),
        Some(v) => format!("{v:.0}"),
        None => "-".to_string(),
    }
}

/// Fraction as a percentage with two decimals, `"-"` when undefined.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "-".to_string(),
    }
}

/// Ratio with two decimals and an `x` suffix, `"-"` when undefined.
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}x"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(1234567.891, "₹"), "₹1,234,567.89");
        assert_eq!(format_currency(999.0, "₹"), "₹999.00");
        assert_eq!(format_currency(1000.0, "₹"), "₹1,000.00");
        assert_eq!(format_currency(0.0, "₹"), "₹0.00");
        assert_eq!(format_currency(100000.5, "$"), "$100,000.50");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(-1500.0, "₹"), "₹-1,500.00");
        assert_eq!(format_currency(-0.001, "₹"), "₹0.00");
    }

    #[test]
    fn test_currency_rounds_into_next_group() {
        assert_eq!(format_currency(999.999, "₹"), "₹1,000.00");
    }

    #[test]
    fn test_count_and_average() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_average(Some(15234.6)), "15,235");
        assert_eq!(format_average(None), "-");
    }

    #[test]
    fn test_percent_and_ratio() {
        assert_eq!(format_percent(Some(0.125)), "12.50%");
        assert_eq!(format_percent(None), "-");
        assert_eq!(format_ratio(Some(1.5)), "1.50x");
        assert_eq!(format_ratio(None), "-");
    }
}
