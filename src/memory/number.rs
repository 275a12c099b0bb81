//! Conversions between display text and decimal values.

use crate::error::{CalcError, Result};
use bigdecimal::BigDecimal;

/// Parse the absolute display text, applying the negation flag.
///
/// A trailing decimal point is accepted (`"3."` is 3), since the display
/// shows one while the user is still typing.
pub fn parse_display(text: &str, negated: bool) -> Result<BigDecimal> {
    let digits = text.strip_suffix('.').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(CalcError::MalformedDisplay(text.to_string()));
    }

    let value: BigDecimal = digits
        .parse()
        .map_err(|_| CalcError::MalformedDisplay(text.to_string()))?;

    Ok(if negated { -value } else { value })
}

/// Render a decimal without an exponent, keeping its scale.
///
/// Zero is never rendered with a sign.
pub fn to_plain_string(value: &BigDecimal) -> String {
    value.to_plain_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> BigDecimal {
        text.parse().unwrap()
    }

    fn render(text: &str) -> String {
        to_plain_string(&text.parse().unwrap())
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("12.5", false).unwrap(), dec("12.5"));
        assert_eq!(parse_display("12.5", true).unwrap(), dec("-12.5"));
        assert_eq!(parse_display("3.", false).unwrap(), dec("3"));
        assert_eq!(parse_display("0.", true).unwrap(), dec("0"));
    }

    #[test]
    fn test_parse_display_rejects_garbage() {
        assert!(matches!(
            parse_display("", false),
            Err(CalcError::MalformedDisplay(_))
        ));
        assert!(matches!(
            parse_display("-5", false),
            Err(CalcError::MalformedDisplay(_))
        ));
        assert!(matches!(
            parse_display("1.2.3", false),
            Err(CalcError::MalformedDisplay(_))
        ));
    }

    #[test]
    fn test_plain_rendering_keeps_scale() {
        assert_eq!(render("12.50"), "12.50");
        assert_eq!(render("0.05"), "0.05");
        assert_eq!(render("-0.5"), "-0.5");
        assert_eq!(render("7"), "7");
    }

    #[test]
    fn test_plain_rendering_expands_exponent() {
        assert_eq!(render("4e2"), "400");
        assert_eq!(render("-3e-6"), "-0.000003");
    }

    #[test]
    fn test_zero_has_no_sign() {
        assert_eq!(to_plain_string(&parse_display("0", true).unwrap()), "0");
        assert_eq!(to_plain_string(&parse_display("0.00", true).unwrap()), "0.00");
    }
}
