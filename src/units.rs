use alloy::primitives::{
    utils::{format_units, parse_units, ParseUnits},
    U256,
};

use crate::errors::SwapError;

/// Parses a human readable decimal amount into its fixed point representation.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, SwapError> {
    match parse_units(amount.trim(), decimals)? {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => Err(SwapError::NegativeAmount(amount.to_string())),
    }
}

/// Formats a fixed point amount as a decimal string.
///
/// Trailing fractional zeros are dropped, keeping at least one digit after the
/// point, so `100000000` with 6 decimals renders as `100.0`.
pub fn format_amount(amount: U256, decimals: u8) -> Result<String, SwapError> {
    let formatted = format_units(amount, decimals)?;
    Ok(trim_fraction(formatted))
}

fn trim_fraction(mut formatted: String) -> String {
    if let Some(point) = formatted.find('.') {
        let keep = formatted.trim_end_matches('0').len().max(point + 2);
        formatted.truncate(keep);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_six_decimals() {
        assert_eq!(format_amount(U256::from(100_000_000), 6).unwrap(), "100.0");
        assert_eq!(format_amount(U256::from(1_234_567), 6).unwrap(), "1.234567");
        assert_eq!(format_amount(U256::from(1), 6).unwrap(), "0.000001");
        assert_eq!(format_amount(U256::ZERO, 6).unwrap(), "0.0");
    }

    #[test]
    fn test_format_eighteen_decimals() {
        assert_eq!(
            format_amount(U256::from(1_000_000_000_000_000_000_u128), 18).unwrap(),
            "1.0"
        );
        assert_eq!(
            format_amount(U256::from(995_000_000_000_000_000_u128), 18).unwrap(),
            "0.995"
        );
        assert_eq!(
            format_amount(U256::from(26_543_210_987_654_321_u128), 18).unwrap(),
            "0.026543210987654321"
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100", 6).unwrap(), U256::from(100_000_000));
        assert_eq!(
            parse_amount("1", 18).unwrap(),
            U256::from(1_000_000_000_000_000_000_u128)
        );
        assert_eq!(parse_amount("0.5", 6).unwrap(), U256::from(500_000));
    }

    #[test]
    fn test_parse_negative_amount() {
        assert!(matches!(
            parse_amount("-1", 6),
            Err(SwapError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_amount("one hundred", 6),
            Err(SwapError::UnitsError(_))
        ));
    }

    #[test]
    fn test_trim_fraction_without_point() {
        assert_eq!(trim_fraction("42".to_string()), "42");
        assert_eq!(trim_fraction("4.200".to_string()), "4.2");
    }
}
