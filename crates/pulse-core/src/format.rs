//! Number-to-text helpers shared by every view.

const NA: &str = "N/A";

/// Format a price the way an en-US currency formatter would: symbol prefix,
/// thousands separators, exactly two fraction digits.
///
/// `None` and non-finite values render as `N/A`. An empty currency code is
/// treated as USD; codes without a known symbol are written out followed by a
/// non-breaking space (`CHF 1,234.50`).
pub fn format_currency(value: Option<f64>, currency: &str) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return NA.to_string();
    };

    let code = currency.trim().to_uppercase();
    let prefix = match code.as_str() {
        "" | "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "INR" => "₹".to_string(),
        "CNY" => "CN¥".to_string(),
        "CAD" => "CA$".to_string(),
        "AUD" => "A$".to_string(),
        "HKD" => "HK$".to_string(),
        other => format!("{other}\u{a0}"),
    };

    let amount = group_fixed(value.abs(), 2);
    if is_negative(value, 2) {
        format!("-{prefix}{amount}")
    } else {
        format!("{prefix}{amount}")
    }
}

/// Magnitude-suffixed counts for market caps and volumes.
///
/// Strictly above a trillion, billion or million the value is scaled and given
/// two fraction digits; smaller values are grouped with up to three.
pub fn format_compact(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return NA.to_string();
    };

    if value > 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if value > 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value > 1e6 {
        format!("{:.2}M", value / 1e6)
    } else {
        format_grouped(value)
    }
}

/// `+1.23` / `-1.23`, with `suffix` appended (e.g. `%`). Zero is positive.
pub fn format_signed(value: f64, suffix: &str) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}{suffix}")
}

/// Fixed digits, or `N/A`.
pub fn format_fixed(value: Option<f64>, digits: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.digits$}"),
        None => NA.to_string(),
    }
}

/// Plain grouped number with up to three fraction digits, trailing zeros
/// dropped (`1,234.5`, `-12`, `0.125`).
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return NA.to_string();
    }
    let fixed = group_fixed(value.abs(), 3);
    let trimmed = match fixed.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int.to_string()
            } else {
                format!("{int}.{frac}")
            }
        }
        None => fixed,
    };
    if is_negative(value, 3) {
        format!("-{trimmed}")
    } else {
        trimmed
    }
}

// -------------------------------------------------------------------------------------------------

/// A value that rounds to zero is not shown with a minus sign.
fn is_negative(value: f64, digits: i32) -> bool {
    value < 0.0 && (value.abs() * 10f64.powi(digits)).round() > 0.0
}

/// Round half away from zero to `digits` places and group the integer part.
fn group_fixed(abs: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let scaled = (abs * scale).round();
    let int_part = (scaled / scale).trunc();
    let frac_part = scaled - int_part * scale;

    let int_digits = format!("{int_part:.0}");
    let mut grouped = String::with_capacity(int_digits.len() + int_digits.len() / 3);
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if digits == 0 {
        grouped
    } else {
        format!("{grouped}.{:0digits$.0}", frac_part, digits = digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_missing_values() {
        assert_eq!(format_currency(None, "USD"), "N/A");
        assert_eq!(format_currency(None, ""), "N/A");
        assert_eq!(format_currency(Some(f64::NAN), "USD"), "N/A");
        assert_eq!(format_currency(Some(f64::INFINITY), "EUR"), "N/A");
    }

    #[test]
    fn currency_two_fraction_digits() {
        assert_eq!(format_currency(Some(0.0), "USD"), "$0.00");
        assert_eq!(format_currency(Some(5.0), "USD"), "$5.00");
        assert_eq!(format_currency(Some(1234.5), "USD"), "$1,234.50");
        assert_eq!(format_currency(Some(1234567.891), "USD"), "$1,234,567.89");
        assert_eq!(format_currency(Some(0.999), "USD"), "$1.00");
        assert_eq!(format_currency(Some(999.996), "USD"), "$1,000.00");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(format_currency(Some(-42.0), "USD"), "-$42.00");
        assert_eq!(format_currency(Some(-1234.5), "EUR"), "-€1,234.50");
        assert_eq!(format_currency(Some(-0.001), "USD"), "$0.00");
    }

    #[test]
    fn currency_symbols() {
        assert_eq!(format_currency(Some(2950.4), "INR"), "₹2,950.40");
        assert_eq!(format_currency(Some(10.0), "gbp"), "£10.00");
        assert_eq!(format_currency(Some(10.0), ""), "$10.00");
        assert_eq!(format_currency(Some(1234.5), "CHF"), "CHF\u{a0}1,234.50");
    }

    #[test]
    fn compact_magnitudes() {
        assert_eq!(format_compact(None), "N/A");
        assert_eq!(format_compact(Some(2.95e12)), "2.95T");
        assert_eq!(format_compact(Some(1.5e9)), "1.50B");
        assert_eq!(format_compact(Some(51_234_000.0)), "51.23M");
        // boundaries are strict
        assert_eq!(format_compact(Some(1e6)), "1,000,000");
        assert_eq!(format_compact(Some(12_345.6789)), "12,345.679");
    }

    #[test]
    fn signed_changes() {
        assert_eq!(format_signed(1.234, ""), "+1.23");
        assert_eq!(format_signed(-0.58, "%"), "-0.58%");
        assert_eq!(format_signed(0.0, "%"), "+0.00%");
    }

    #[test]
    fn fixed_and_grouped() {
        assert_eq!(format_fixed(Some(0.12345), 3), "0.123");
        assert_eq!(format_fixed(None, 2), "N/A");
        assert_eq!(format_grouped(-12.0), "-12");
        assert_eq!(format_grouped(1234.5), "1,234.5");
        assert_eq!(format_grouped(0.125), "0.125");
    }
}
