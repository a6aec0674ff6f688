//! Price coercion and formatting.
//!
//! Prices arrive as text (catalog fields, button arguments) and are coerced
//! leniently: blank text is zero and anything unreadable becomes `NaN`.
//! `NaN` is kept as-is and flows into totals.

/// Coerce price text to a number.
pub fn parse_price(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust would also accept "inf" and "nan"; only digits, sign, point and exponent count here.
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Shortest textual form of a price: `450`, `449.5`, `NaN`.
///
/// Magnitudes from `1e21` up and below `1e-6` switch to exponent form with
/// a signed exponent, e.g. `1e+21`, `1.5e-7`.
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let s = format!("{:e}", value);
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        }
    } else {
        format!("{}", value)
    }
}

/// Price with its currency prefix, e.g. `Rs. 450`.
pub fn price_label(currency: &str, value: f64) -> String {
    if currency.is_empty() {
        format_price(value)
    } else {
        format!("{} {}", currency, format_price(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_price("450"), 450.0);
        assert_eq!(parse_price(" 899 "), 899.0);
        assert_eq!(parse_price("12.5"), 12.5);
        assert_eq!(parse_price("1e3"), 1000.0);
        assert_eq!(parse_price("-3"), -3.0);
    }

    #[test]
    fn test_parse_blank_is_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("   "), 0.0);
    }

    #[test]
    fn test_parse_garbage_is_nan() {
        assert!(parse_price("abc").is_nan());
        assert!(parse_price("12abc").is_nan());
        assert!(parse_price("inf").is_nan());
        assert!(parse_price("nan").is_nan());
        assert!(parse_price("Rs. 450").is_nan());
    }

    #[test]
    fn test_parse_infinity_literal() {
        assert_eq!(parse_price("Infinity"), f64::INFINITY);
        assert_eq!(parse_price("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_price(450.0), "450");
        assert_eq!(format_price(449.5), "449.5");
        assert_eq!(format_price(-0.0), "0");
        assert_eq!(format_price(f64::NAN), "NaN");
        assert_eq!(format_price(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(price_label("Rs.", 1349.0), "Rs. 1349");
        assert_eq!(price_label("", 3.0), "3");
    }

    #[test]
    fn test_format_extreme_magnitudes() {
        assert_eq!(format_price(1e21), "1e+21");
        assert_eq!(format_price(-2.5e30), "-2.5e+30");
        assert_eq!(format_price(1e-7), "1e-7");
        assert_eq!(format_price(1.5e-7), "1.5e-7");
        assert_eq!(format_price(1e20), "100000000000000000000");
        assert_eq!(format_price(0.000001), "0.000001");
    }
}
