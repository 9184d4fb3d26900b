//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Context, One, RoundingMode, Signed, Zero};
use ethnum::U256;

use crate::{
    try_bigint_to_u256, u256_to_biguint, CoreError, ARITHMETIC_OVERFLOW, DECIMAL_PRECISION, NEGATIVE_AMOUNT, NON_POSITIVE_PRICE, TICK_BASE_DIGITS,
    TICK_BASE_SCALE,
};

pub(crate) fn decimal_context() -> Context {
    Context::default().with_precision(DECIMAL_PRECISION)
}

pub(crate) fn round_to_precision(value: BigDecimal) -> BigDecimal {
    if value.digits() > DECIMAL_PRECISION.get() {
        value.with_precision_round(DECIMAL_PRECISION, RoundingMode::HalfEven)
    } else {
        value
    }
}

/// `10^exponent`, exact.
pub(crate) fn pow10(exponent: i64) -> BigDecimal {
    BigDecimal::new(BigInt::one(), -exponent)
}

/// The factor turning a raw token1/token0 ratio into a decimal-adjusted price.
pub(crate) fn decimal_adjustment(decimals_0: u8, decimals_1: u8) -> BigDecimal {
    pow10(i64::from(decimals_0) - i64::from(decimals_1))
}

/// `1.0001^tick` rounded to `DECIMAL_PRECISION` significant digits.
///
/// Every caller goes through this one function, so equal ticks always produce
/// bit-identical decimals and comparisons between them are exact.
pub(crate) fn tick_base_pow(tick: i32) -> BigDecimal {
    let mut factor = BigDecimal::new(BigInt::from(TICK_BASE_DIGITS), TICK_BASE_SCALE);
    let mut result = BigDecimal::one();
    let mut exponent = tick.unsigned_abs();

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = round_to_precision(&result * &factor);
        }
        exponent >>= 1;
        if exponent > 0 {
            factor = round_to_precision(&factor * &factor);
        }
    }

    if tick < 0 {
        result.inverse_with_context(&decimal_context())
    } else {
        result
    }
}

pub(crate) fn try_sqrt(value: &BigDecimal) -> Result<BigDecimal, CoreError> {
    value.sqrt_with_context(&decimal_context()).ok_or(NON_POSITIVE_PRICE)
}

pub(crate) fn try_div(numerator: &BigDecimal, denominator: &BigDecimal) -> Result<BigDecimal, CoreError> {
    if denominator.is_zero() {
        return Err(ARITHMETIC_OVERFLOW);
    }
    Ok(round_to_precision(numerator / denominator))
}

pub(crate) fn ensure_positive_price(price: &BigDecimal) -> Result<(), CoreError> {
    if price.is_positive() {
        Ok(())
    } else {
        Err(NON_POSITIVE_PRICE)
    }
}

pub(crate) fn ensure_non_negative_amount(amount: &BigDecimal) -> Result<(), CoreError> {
    if amount.is_negative() {
        Err(NEGATIVE_AMOUNT)
    } else {
        Ok(())
    }
}

pub(crate) fn u256_to_decimal(value: U256) -> BigDecimal {
    BigDecimal::from(BigInt::from(u256_to_biguint(value)))
}

/// Rounds a non-negative decimal to an integer with the given mode.
pub(crate) fn try_decimal_to_u256(value: &BigDecimal, mode: RoundingMode) -> Result<U256, CoreError> {
    let (integer, _) = value.with_scale_round(0, mode).into_bigint_and_exponent();
    try_bigint_to_u256(&integer)
}

/// Truncates toward zero to `decimals` fractional digits.
pub(crate) fn truncate_to_decimals(value: &BigDecimal, decimals: u8) -> BigDecimal {
    value.with_scale_round(i64::from(decimals), RoundingMode::Down)
}
