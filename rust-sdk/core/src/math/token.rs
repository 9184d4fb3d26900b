//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Signed, ToPrimitive};
use ethnum::U256;
use log::debug;

use super::decimal::pow10;
use crate::{
    try_into_u128, try_mul_div, CoreError, AMOUNT_EXCEEDS_MAX_U128, BPS_DENOMINATOR, INVALID_DECIMAL_STRING, INVALID_SLIPPAGE_TOLERANCE, NEGATIVE_AMOUNT,
    TOO_MANY_DECIMALS,
};

/// Get the maximum amount with a slippage tolerance
/// e.g. Your estimated amount you send is 10000 with 100 bps slippage, then you will send at most 10100
///
/// # Parameters
/// - `amount`: The amount of tokens
/// - `slippage_tolerance_bps`: The slippage tolerance in bps (should be in range 0..BPS_DENOMINATOR)
///
/// # Returns
/// - `u128`: The maximum amount, rounded up
pub fn try_get_max_amount_with_slippage_tolerance(amount: u128, slippage_tolerance_bps: u16) -> Result<u128, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let product = U256::from(BPS_DENOMINATOR) + U256::from(slippage_tolerance_bps);
    let result = try_mul_div(U256::from(amount), product, U256::from(BPS_DENOMINATOR), true)?;
    try_into_u128(result)
}

/// Get the minimum amount with a slippage tolerance
/// e.g. Your estimated amount you receive is 10000 with 100 bps slippage, then you will receive at least 9900
///
/// # Parameters
/// - `amount`: The amount of tokens
/// - `slippage_tolerance_bps`: The slippage tolerance in bps (should be in range 0..BPS_DENOMINATOR)
///
/// # Returns
/// - `u128`: The minimum amount, rounded down
pub fn try_get_min_amount_with_slippage_tolerance(amount: u128, slippage_tolerance_bps: u16) -> Result<u128, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let product = U256::from(BPS_DENOMINATOR - slippage_tolerance_bps);
    let result = try_mul_div(U256::from(amount), product, U256::from(BPS_DENOMINATOR), false)?;
    try_into_u128(result)
}

/// Parse a human decimal string (e.g. `"1.5"`) into raw token units.
///
/// # Parameters
/// - `text`: The decimal string as typed by the user
/// - `decimals`: The number of decimals of the token
///
/// # Returns
/// - `u128`: `text * 10^decimals`, or an error when the string has more
///   fractional digits than the token supports
pub fn parse_token_amount(text: &str, decimals: u8) -> Result<u128, CoreError> {
    let amount = BigDecimal::from_str(text.trim()).map_err(|_| INVALID_DECIMAL_STRING)?;
    if amount.is_negative() {
        return Err(NEGATIVE_AMOUNT);
    }

    let amount = amount.normalized();
    let (_, scale) = amount.as_bigint_and_exponent();
    if scale > i64::from(decimals) {
        debug!(target: "log", "Amount {} has more than {} decimals", text, decimals);
        return Err(TOO_MANY_DECIMALS);
    }

    (amount * pow10(i64::from(decimals))).to_u128().ok_or(AMOUNT_EXCEEDS_MAX_U128)
}

/// Format raw token units as a plain decimal string with trailing zeros trimmed.
pub fn format_token_amount(amount: u128, decimals: u8) -> String {
    BigDecimal::new(BigInt::from(amount), i64::from(decimals)).normalized().to_plain_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_get_max_amount_with_slippage_tolerance() {
        assert_eq!(try_get_max_amount_with_slippage_tolerance(10000, 100), Ok(10100));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(10000, 0), Ok(10000));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(1, 1), Ok(2));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(10000, 10000), Ok(20000));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(10000, 10001), Err(INVALID_SLIPPAGE_TOLERANCE));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(u128::MAX, 1), Err(AMOUNT_EXCEEDS_MAX_U128));
    }

    #[test]
    fn test_get_min_amount_with_slippage_tolerance() {
        assert_eq!(try_get_min_amount_with_slippage_tolerance(10000, 100), Ok(9900));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(10000, 0), Ok(10000));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1, 1), Ok(0));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(10000, 10000), Ok(0));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(u128::MAX, 0), Ok(u128::MAX));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(10000, 10001), Err(INVALID_SLIPPAGE_TOLERANCE));
    }

    #[rstest]
    #[case("1.5", 6, 1_500_000)]
    #[case("0.000001", 6, 1)]
    #[case("1.500000000", 6, 1_500_000)]
    #[case(" 42 ", 0, 42)]
    #[case("0", 18, 0)]
    #[case("1", 18, 1_000_000_000_000_000_000)]
    #[case("1e3", 2, 100_000)]
    fn test_parse_token_amount(#[case] text: &str, #[case] decimals: u8, #[case] expected: u128) {
        assert_eq!(parse_token_amount(text, decimals), Ok(expected));
    }

    #[rstest]
    #[case("0.0000001", 6, TOO_MANY_DECIMALS)]
    #[case("1.5", 0, TOO_MANY_DECIMALS)]
    #[case("abc", 6, INVALID_DECIMAL_STRING)]
    #[case("", 6, INVALID_DECIMAL_STRING)]
    #[case("-1", 6, NEGATIVE_AMOUNT)]
    #[case("1e40", 0, AMOUNT_EXCEEDS_MAX_U128)]
    fn test_parse_token_amount_errors(#[case] text: &str, #[case] decimals: u8, #[case] expected: CoreError) {
        assert_eq!(parse_token_amount(text, decimals), Err(expected));
    }

    #[rstest]
    #[case(1_500_000, 6, "1.5")]
    #[case(1, 18, "0.000000000000000001")]
    #[case(0, 6, "0")]
    #[case(1_000_000, 0, "1000000")]
    #[case(1_000_000, 6, "1")]
    fn test_format_token_amount(#[case] amount: u128, #[case] decimals: u8, #[case] expected: &str) {
        assert_eq!(format_token_amount(amount, decimals), expected);
    }

    #[test]
    fn test_parse_format_round_trip() {
        for text in ["123.456", "0.1", "98765432109876.54321", "7"] {
            assert_eq!(format_token_amount(parse_token_amount(text, 8).unwrap(), 8), text);
        }
    }
}
