//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{
    order_tick_indexes, position_status, tick_to_sqrt_price_x96, try_get_liquidity_from_0, try_get_liquidity_from_1,
    try_get_max_amount_with_slippage_tolerance, try_get_min_amount_with_slippage_tolerance, try_into_u128, try_token_amounts_for_liquidity, CoreError, DecreaseLiquidityQuote,
    IncreaseLiquidityQuote, PositionStatus, INVALID_TICK_RANGE,
};

/// Calculate the quote for decreasing liquidity
///
/// # Parameters
/// - `liquidity_delta` - The amount of liquidity to decrease
/// - `slippage_tolerance_bps` - The slippage tolerance in bps
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_index_1` - The first tick index of the position
/// - `tick_index_2` - The second tick index of the position
///
/// # Returns
/// - A DecreaseLiquidityQuote struct containing the estimated token amounts
pub fn decrease_liquidity_quote(
    liquidity_delta: u128,
    slippage_tolerance_bps: u16,
    sqrt_price_x96: U256,
    tick_index_1: i32,
    tick_index_2: i32,
) -> Result<DecreaseLiquidityQuote, CoreError> {
    if liquidity_delta == 0 {
        return Ok(DecreaseLiquidityQuote::default());
    }

    let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
    let token_est = try_token_amounts_for_liquidity(liquidity_delta, sqrt_price_x96, tick_range.tick_lower_index, tick_range.tick_upper_index, false)?;

    Ok(DecreaseLiquidityQuote {
        liquidity_delta,
        token_est_0: token_est.amount_0,
        token_est_1: token_est.amount_1,
        token_min_0: try_get_min_amount_with_slippage_tolerance(token_est.amount_0, slippage_tolerance_bps)?,
        token_min_1: try_get_min_amount_with_slippage_tolerance(token_est.amount_1, slippage_tolerance_bps)?,
    })
}

/// Calculate the quote for increasing liquidity
///
/// # Parameters
/// - `liquidity_delta` - The amount of liquidity to increase
/// - `slippage_tolerance_bps` - The slippage tolerance in bps
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_index_1` - The first tick index of the position
/// - `tick_index_2` - The second tick index of the position
///
/// # Returns
/// - An IncreaseLiquidityQuote struct containing the estimated token amounts
pub fn increase_liquidity_quote(
    liquidity_delta: u128,
    slippage_tolerance_bps: u16,
    sqrt_price_x96: U256,
    tick_index_1: i32,
    tick_index_2: i32,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    if liquidity_delta == 0 {
        return Ok(IncreaseLiquidityQuote::default());
    }

    let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
    let token_est = try_token_amounts_for_liquidity(liquidity_delta, sqrt_price_x96, tick_range.tick_lower_index, tick_range.tick_upper_index, true)?;

    Ok(IncreaseLiquidityQuote {
        liquidity_delta,
        token_est_0: token_est.amount_0,
        token_est_1: token_est.amount_1,
        token_max_0: try_get_max_amount_with_slippage_tolerance(token_est.amount_0, slippage_tolerance_bps)?,
        token_max_1: try_get_max_amount_with_slippage_tolerance(token_est.amount_1, slippage_tolerance_bps)?,
    })
}

/// Calculate the quote for increasing liquidity given a token 0 amount
///
/// # Parameters
/// - `token_amount_0` - The amount of token 0 to deposit
/// - `slippage_tolerance_bps` - The slippage tolerance in bps
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_index_1` - The first tick index of the position
/// - `tick_index_2` - The second tick index of the position
///
/// # Returns
/// - An IncreaseLiquidityQuote struct containing the estimated token amounts
pub fn increase_liquidity_quote_0(
    token_amount_0: u128,
    slippage_tolerance_bps: u16,
    sqrt_price_x96: U256,
    tick_index_1: i32,
    tick_index_2: i32,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
    let liquidity = match position_status(sqrt_price_x96, tick_range.tick_lower_index, tick_range.tick_upper_index)? {
        PositionStatus::Invalid => return Err(INVALID_TICK_RANGE),
        PositionStatus::PriceBelowRange => {
            let sqrt_price_lower = tick_to_sqrt_price_x96(tick_range.tick_lower_index)?;
            let sqrt_price_upper = tick_to_sqrt_price_x96(tick_range.tick_upper_index)?;
            try_get_liquidity_from_0(token_amount_0, sqrt_price_lower, sqrt_price_upper)?
        }
        PositionStatus::PriceInRange => {
            let sqrt_price_upper = tick_to_sqrt_price_x96(tick_range.tick_upper_index)?;
            try_get_liquidity_from_0(token_amount_0, sqrt_price_x96, sqrt_price_upper)?
        }
        PositionStatus::PriceAboveRange => U256::ZERO,
    };

    increase_liquidity_quote(try_into_u128(liquidity)?, slippage_tolerance_bps, sqrt_price_x96, tick_index_1, tick_index_2)
}

/// Calculate the quote for increasing liquidity given a token 1 amount
///
/// # Parameters
/// - `token_amount_1` - The amount of token 1 to deposit
/// - `slippage_tolerance_bps` - The slippage tolerance in bps
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_index_1` - The first tick index of the position
/// - `tick_index_2` - The second tick index of the position
///
/// # Returns
/// - An IncreaseLiquidityQuote struct containing the estimated token amounts
pub fn increase_liquidity_quote_1(
    token_amount_1: u128,
    slippage_tolerance_bps: u16,
    sqrt_price_x96: U256,
    tick_index_1: i32,
    tick_index_2: i32,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
    let liquidity = match position_status(sqrt_price_x96, tick_range.tick_lower_index, tick_range.tick_upper_index)? {
        PositionStatus::Invalid => return Err(INVALID_TICK_RANGE),
        PositionStatus::PriceBelowRange => U256::ZERO,
        PositionStatus::PriceInRange => {
            let sqrt_price_lower = tick_to_sqrt_price_x96(tick_range.tick_lower_index)?;
            try_get_liquidity_from_1(token_amount_1, sqrt_price_lower, sqrt_price_x96)?
        }
        PositionStatus::PriceAboveRange => {
            let sqrt_price_lower = tick_to_sqrt_price_x96(tick_range.tick_lower_index)?;
            let sqrt_price_upper = tick_to_sqrt_price_x96(tick_range.tick_upper_index)?;
            try_get_liquidity_from_1(token_amount_1, sqrt_price_lower, sqrt_price_upper)?
        }
    };

    increase_liquidity_quote(try_into_u128(liquidity)?, slippage_tolerance_bps, sqrt_price_x96, tick_index_1, tick_index_2)
}
