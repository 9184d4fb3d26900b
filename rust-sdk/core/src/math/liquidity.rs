//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use bigdecimal::{BigDecimal, Signed, Zero};
use ethnum::U256;
use log::debug;

use super::decimal::{ensure_non_negative_amount, ensure_positive_price, truncate_to_decimals, try_div, try_sqrt};
use super::{sqrt_price_x96_to_price, tick_at_sqrt_price, tick_to_price, tick_to_sqrt_price_x96};
use crate::{try_into_u128, try_mul_div, CoreError, DepositAmounts, TokenAmounts, ARITHMETIC_OVERFLOW, DEGENERATE_PRICE, INVALID_TICK_RANGE, Q96, RESOLUTION_96};

/// Calculate the liquidity backed by an amount of token 0 between the current
/// price and the upper tick of a range. Human units.
///
/// # Parameters
/// - `amount_0` - The amount of token 0
/// - `current_price` - The decimal-adjusted current price
/// - `tick_upper_index` - The upper tick of the range
/// - `decimals_0` - The number of decimals of token 0
/// - `decimals_1` - The number of decimals of token 1
///
/// # Returns
/// - `amount_0 * sqrt(P) * sqrt(Pmax) / (sqrt(Pmax) - sqrt(P))`
pub fn liquidity_from_amount0(
    amount_0: &BigDecimal,
    current_price: &BigDecimal,
    tick_upper_index: i32,
    decimals_0: u8,
    decimals_1: u8,
) -> Result<BigDecimal, CoreError> {
    ensure_non_negative_amount(amount_0)?;
    ensure_positive_price(current_price)?;

    let price_upper = tick_to_price(tick_upper_index, decimals_0, decimals_1);
    if *current_price >= price_upper {
        debug!(target: "log", "Price {} is not below the upper tick {}", current_price, tick_upper_index);
        return Err(DEGENERATE_PRICE);
    }

    let sqrt_price = try_sqrt(current_price)?;
    let sqrt_price_upper = try_sqrt(&price_upper)?;
    let denominator = &sqrt_price_upper - &sqrt_price;
    try_div(&(amount_0 * &sqrt_price * &sqrt_price_upper), &denominator)
}

/// Calculate the liquidity backed by an amount of token 1 between the lower
/// tick of a range and the current price. Human units.
///
/// # Returns
/// - `amount_1 / (sqrt(P) - sqrt(Pmin))`
pub fn liquidity_from_amount1(
    amount_1: &BigDecimal,
    current_price: &BigDecimal,
    tick_lower_index: i32,
    decimals_0: u8,
    decimals_1: u8,
) -> Result<BigDecimal, CoreError> {
    ensure_non_negative_amount(amount_1)?;
    ensure_positive_price(current_price)?;

    let price_lower = tick_to_price(tick_lower_index, decimals_0, decimals_1);
    if *current_price <= price_lower {
        debug!(target: "log", "Price {} is not above the lower tick {}", current_price, tick_lower_index);
        return Err(DEGENERATE_PRICE);
    }

    let sqrt_price = try_sqrt(current_price)?;
    let sqrt_price_lower = try_sqrt(&price_lower)?;
    try_div(amount_1, &(sqrt_price - sqrt_price_lower))
}

/// Calculate the amount of token 1 that pairs with an amount of token 0 in a range.
///
/// The result is truncated toward zero to `decimals_1` places. It is negative
/// when the current price sits below the range; callers clamp it.
///
/// # Parameters
/// - `amount_0` - The amount of token 0
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_lower_index` - The lower tick of the range
/// - `tick_upper_index` - The upper tick of the range
/// - `decimals_0` - The number of decimals of token 0
/// - `decimals_1` - The number of decimals of token 1
///
/// # Returns
/// - The matching amount of token 1
pub fn amount1_from_amount0(
    amount_0: &BigDecimal,
    sqrt_price_x96: U256,
    tick_lower_index: i32,
    tick_upper_index: i32,
    decimals_0: u8,
    decimals_1: u8,
) -> Result<BigDecimal, CoreError> {
    ensure_ordered_range(tick_lower_index, tick_upper_index)?;
    let current_price = sqrt_price_x96_to_price(sqrt_price_x96, decimals_0, decimals_1);
    let liquidity = liquidity_from_amount0(amount_0, &current_price, tick_upper_index, decimals_0, decimals_1)?;

    let sqrt_price = try_sqrt(&current_price)?;
    let sqrt_price_lower = try_sqrt(&tick_to_price(tick_lower_index, decimals_0, decimals_1))?;
    let amount_1 = liquidity * (sqrt_price - sqrt_price_lower);
    Ok(truncate_to_decimals(&amount_1, decimals_1))
}

/// Calculate the amount of token 0 that pairs with an amount of token 1 in a range.
///
/// The result is truncated toward zero to `decimals_0` places. It is negative
/// when the current price sits above the range; callers clamp it.
pub fn amount0_from_amount1(
    amount_1: &BigDecimal,
    sqrt_price_x96: U256,
    tick_lower_index: i32,
    tick_upper_index: i32,
    decimals_0: u8,
    decimals_1: u8,
) -> Result<BigDecimal, CoreError> {
    ensure_ordered_range(tick_lower_index, tick_upper_index)?;
    let current_price = sqrt_price_x96_to_price(sqrt_price_x96, decimals_0, decimals_1);
    let liquidity = liquidity_from_amount1(amount_1, &current_price, tick_lower_index, decimals_0, decimals_1)?;

    let sqrt_price = try_sqrt(&current_price)?;
    let sqrt_price_upper = try_sqrt(&tick_to_price(tick_upper_index, decimals_0, decimals_1))?;
    let numerator = liquidity * (&sqrt_price_upper - &sqrt_price);
    let amount_0 = try_div(&numerator, &(sqrt_price * sqrt_price_upper))?;
    Ok(truncate_to_decimals(&amount_0, decimals_0))
}

/// Split the wallet balances a user offered into the largest deposit the range accepts.
///
/// When the whole token 0 balance can be matched, token 0 is used in full and
/// the required token 1 is returned. Otherwise token 1 is used in full. A price
/// at or below the range takes only token 0, at or above only token 1.
///
/// # Parameters
/// - `token_0_amount` - The token 0 balance offered
/// - `token_1_amount` - The token 1 balance offered
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_lower_index` - The lower tick of the range
/// - `tick_upper_index` - The upper tick of the range
/// - `decimals_0` - The number of decimals of token 0
/// - `decimals_1` - The number of decimals of token 1
///
/// # Returns
/// - The deposit pair, both sides non-negative
pub fn optimal_deposit_amounts(
    token_0_amount: &BigDecimal,
    token_1_amount: &BigDecimal,
    sqrt_price_x96: U256,
    tick_lower_index: i32,
    tick_upper_index: i32,
    decimals_0: u8,
    decimals_1: u8,
) -> Result<DepositAmounts, CoreError> {
    ensure_ordered_range(tick_lower_index, tick_upper_index)?;
    ensure_non_negative_amount(token_0_amount)?;
    ensure_non_negative_amount(token_1_amount)?;

    let current_price = sqrt_price_x96_to_price(sqrt_price_x96, decimals_0, decimals_1);
    ensure_positive_price(&current_price)?;

    if current_price <= tick_to_price(tick_lower_index, decimals_0, decimals_1) {
        return Ok(DepositAmounts {
            amount_0: token_0_amount.clone(),
            amount_1: BigDecimal::zero(),
        });
    }
    if current_price >= tick_to_price(tick_upper_index, decimals_0, decimals_1) {
        return Ok(DepositAmounts {
            amount_0: BigDecimal::zero(),
            amount_1: token_1_amount.clone(),
        });
    }

    let required_1 = amount1_from_amount0(token_0_amount, sqrt_price_x96, tick_lower_index, tick_upper_index, decimals_0, decimals_1)?;
    if required_1 <= *token_1_amount {
        return Ok(DepositAmounts {
            amount_0: token_0_amount.clone(),
            amount_1: clamp_to_zero(required_1),
        });
    }

    let required_0 = amount0_from_amount1(token_1_amount, sqrt_price_x96, tick_lower_index, tick_upper_index, decimals_0, decimals_1)?;
    Ok(DepositAmounts {
        amount_0: clamp_to_zero(required_0),
        amount_1: token_1_amount.clone(),
    })
}

/// Calculate the amount of token 0 between two sqrt prices for a liquidity.
///
/// # Parameters
/// - `sqrt_price_1` - A Q64.96 sqrt price
/// - `sqrt_price_2` - Another Q64.96 sqrt price
/// - `liquidity` - The liquidity
/// - `round_up` - Whether to round the result up
///
/// # Returns
/// - `liquidity * (upper - lower) / (lower * upper)`
pub fn try_get_amount_delta_0(sqrt_price_1: U256, sqrt_price_2: U256, liquidity: u128, round_up: bool) -> Result<U256, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    if sqrt_price_lower == U256::ZERO {
        return Err(ARITHMETIC_OVERFLOW);
    }

    let numerator = U256::from(liquidity) << RESOLUTION_96;
    let quotient = try_mul_div(numerator, sqrt_price_upper - sqrt_price_lower, sqrt_price_upper, round_up)?;
    let amount = quotient / sqrt_price_lower;
    if round_up && amount * sqrt_price_lower != quotient {
        Ok(amount + U256::ONE)
    } else {
        Ok(amount)
    }
}

/// Calculate the amount of token 1 between two sqrt prices for a liquidity.
///
/// # Returns
/// - `liquidity * (upper - lower)`
pub fn try_get_amount_delta_1(sqrt_price_1: U256, sqrt_price_2: U256, liquidity: u128, round_up: bool) -> Result<U256, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    try_mul_div(U256::from(liquidity), sqrt_price_upper - sqrt_price_lower, Q96, round_up)
}

/// Decompose a liquidity into raw token amounts at the current price.
///
/// # Parameters
/// - `liquidity` - The position liquidity
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_lower_index` - The lower tick of the range
/// - `tick_upper_index` - The upper tick of the range
///
/// # Returns
/// - The token amounts, truncated
pub fn token_amounts_for_liquidity(
    liquidity: u128,
    sqrt_price_x96: U256,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<TokenAmounts, CoreError> {
    try_token_amounts_for_liquidity(liquidity, sqrt_price_x96, tick_lower_index, tick_upper_index, false)
}

/// Same as `token_amounts_for_liquidity`, optionally rounding each amount up.
pub fn try_token_amounts_for_liquidity(
    liquidity: u128,
    sqrt_price_x96: U256,
    tick_lower_index: i32,
    tick_upper_index: i32,
    round_up: bool,
) -> Result<TokenAmounts, CoreError> {
    ensure_ordered_range(tick_lower_index, tick_upper_index)?;
    let sqrt_price_lower = tick_to_sqrt_price_x96(tick_lower_index)?;
    let sqrt_price_upper = tick_to_sqrt_price_x96(tick_upper_index)?;
    let tick_current_index = tick_at_sqrt_price(sqrt_price_x96)?;

    let (amount_0, amount_1) = if tick_current_index < tick_lower_index {
        (try_get_amount_delta_0(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?, U256::ZERO)
    } else if tick_current_index >= tick_upper_index {
        (U256::ZERO, try_get_amount_delta_1(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?)
    } else {
        (
            try_get_amount_delta_0(sqrt_price_x96, sqrt_price_upper, liquidity, round_up)?,
            try_get_amount_delta_1(sqrt_price_lower, sqrt_price_x96, liquidity, round_up)?,
        )
    };

    Ok(TokenAmounts {
        amount_0: try_into_u128(amount_0)?,
        amount_1: try_into_u128(amount_1)?,
    })
}

/// Calculate the maximum liquidity that raw token amounts can fund in a range.
///
/// # Parameters
/// - `amount_0` - The raw amount of token 0 available
/// - `amount_1` - The raw amount of token 1 available
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_lower_index` - The lower tick of the range
/// - `tick_upper_index` - The upper tick of the range
///
/// # Returns
/// - The liquidity, truncated
pub fn liquidity_for_token_amounts(
    amount_0: u128,
    amount_1: u128,
    sqrt_price_x96: U256,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<u128, CoreError> {
    ensure_ordered_range(tick_lower_index, tick_upper_index)?;
    let sqrt_price_lower = tick_to_sqrt_price_x96(tick_lower_index)?;
    let sqrt_price_upper = tick_to_sqrt_price_x96(tick_upper_index)?;

    let liquidity = if sqrt_price_x96 <= sqrt_price_lower {
        try_get_liquidity_from_0(amount_0, sqrt_price_lower, sqrt_price_upper)?
    } else if sqrt_price_x96 < sqrt_price_upper {
        let liquidity_0 = try_get_liquidity_from_0(amount_0, sqrt_price_x96, sqrt_price_upper)?;
        let liquidity_1 = try_get_liquidity_from_1(amount_1, sqrt_price_lower, sqrt_price_x96)?;
        liquidity_0.min(liquidity_1)
    } else {
        try_get_liquidity_from_1(amount_1, sqrt_price_lower, sqrt_price_upper)?
    };

    try_into_u128(liquidity)
}

/// Calculate the liquidity an amount of token 0 funds between two sqrt prices.
///
/// # Parameters
/// - `amount` - The raw amount of token 0
/// - `sqrt_price_1` - A Q64.96 sqrt price
/// - `sqrt_price_2` - Another Q64.96 sqrt price
///
/// # Returns
/// - `amount * lower * upper / (upper - lower)`, truncated
pub fn try_get_liquidity_from_0(amount: u128, sqrt_price_1: U256, sqrt_price_2: U256) -> Result<U256, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    let intermediate = try_mul_div(sqrt_price_lower, sqrt_price_upper, Q96, false)?;
    try_mul_div(U256::from(amount), intermediate, sqrt_price_upper - sqrt_price_lower, false)
}

/// Calculate the liquidity an amount of token 1 funds between two sqrt prices.
///
/// # Returns
/// - `amount / (upper - lower)`, truncated
pub fn try_get_liquidity_from_1(amount: u128, sqrt_price_1: U256, sqrt_price_2: U256) -> Result<U256, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    try_mul_div(U256::from(amount), Q96, sqrt_price_upper - sqrt_price_lower, false)
}

fn order_sqrt_prices(sqrt_price_1: U256, sqrt_price_2: U256) -> (U256, U256) {
    if sqrt_price_1 <= sqrt_price_2 {
        (sqrt_price_1, sqrt_price_2)
    } else {
        (sqrt_price_2, sqrt_price_1)
    }
}

fn ensure_ordered_range(tick_lower_index: i32, tick_upper_index: i32) -> Result<(), CoreError> {
    if tick_lower_index >= tick_upper_index {
        debug!(target: "log", "Rejected tick range [{}, {}]", tick_lower_index, tick_upper_index);
        return Err(INVALID_TICK_RANGE);
    }
    Ok(())
}

fn clamp_to_zero(value: BigDecimal) -> BigDecimal {
    if value.is_negative() {
        BigDecimal::zero()
    } else {
        value
    }
}
