//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use bigdecimal::num_bigint::{BigInt, BigUint};
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use ethnum::U256;
use log::debug;

use super::decimal::{decimal_adjustment, ensure_positive_price, tick_base_pow, try_decimal_to_u256, try_div, try_sqrt, u256_to_decimal};
use crate::{
    u256_to_biguint, CoreError, TickRange, INVALID_TICK_RANGE, INVALID_TICK_SPACING, MAX_TICK, MIN_TICK, MAX_SQRT_RATIO, PRICE_OUT_OF_BOUNDS, Q96, RESOLUTION_96,
    SQRT_PRICE_OUT_OF_BOUNDS, TICK_INDEX_OUT_OF_BOUNDS, TICK_NOT_USABLE,
};

/// Convert a tick index into a decimal-adjusted price (token1 per token0).
///
/// # Parameters
/// - `tick_index` - The tick index
/// - `decimals_0` - The number of decimals of token 0
/// - `decimals_1` - The number of decimals of token 1
///
/// # Returns
/// - `1.0001^tick_index * 10^decimals_0 / 10^decimals_1`
pub fn tick_to_price(tick_index: i32, decimals_0: u8, decimals_1: u8) -> BigDecimal {
    tick_base_pow(tick_index) * decimal_adjustment(decimals_0, decimals_1)
}

/// Convert a decimal-adjusted price into the nearest usable tick index.
///
/// The unsnapped tick is `floor(log(raw_price) / log(1.0001))`, evaluated
/// exactly against `tick_to_price`, so converting a tick's own price returns
/// that tick.
///
/// # Parameters
/// - `price` - The decimal-adjusted price, must be positive
/// - `decimals_0` - The number of decimals of token 0
/// - `decimals_1` - The number of decimals of token 1
/// - `tick_spacing` - The tick spacing the result is snapped to
///
/// # Returns
/// - A tick index that is a multiple of `tick_spacing`
pub fn price_to_tick(price: &BigDecimal, decimals_0: u8, decimals_1: u8, tick_spacing: u16) -> Result<i32, CoreError> {
    ensure_positive_price(price)?;
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }

    let raw_price = price * decimal_adjustment(decimals_1, decimals_0);
    let estimate = raw_price.to_f64().map_or(f64::NAN, |p| libm::log(p) / libm::log(1.0001));
    let tick_index = search_floor_tick(estimate, &raw_price, |tick| Ok(tick_base_pow(tick)), PRICE_OUT_OF_BOUNDS, false)?;

    nearest_usable_tick(tick_index, tick_spacing)
}

/// Round a tick index to the nearest multiple of the tick spacing.
/// Halfway ticks round away from zero on both sides, so `-30` with spacing
/// `60` gives `-60` where a round-half-up rule would give `0`. A result that would leave the
/// `[MIN_TICK, MAX_TICK]` grid is moved one spacing back inside it.
///
/// # Parameters
/// - `tick_index` - The tick index
/// - `tick_spacing` - The tick spacing
///
/// # Returns
/// - The usable tick index closest to `tick_index`
pub fn nearest_usable_tick(tick_index: i32, tick_spacing: u16) -> Result<i32, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }

    let tick_spacing = i64::from(tick_spacing);
    let tick_index = i64::from(tick_index.clamp(MIN_TICK, MAX_TICK));
    let mut rounded = (tick_index.abs() + tick_spacing / 2) / tick_spacing * tick_spacing * tick_index.signum();

    if rounded < i64::from(MIN_TICK) {
        rounded += tick_spacing;
    } else if rounded > i64::from(MAX_TICK) {
        rounded -= tick_spacing;
    }

    // Within [MIN_TICK, MAX_TICK] after the adjustment above.
    Ok(rounded as i32)
}

/// Convert a Q64.96 sqrt price into a decimal-adjusted price. The conversion is exact.
///
/// # Parameters
/// - `sqrt_price_x96` - The sqrt price
/// - `decimals_0` - The number of decimals of token 0
/// - `decimals_1` - The number of decimals of token 1
///
/// # Returns
/// - `(sqrt_price_x96 / 2^96)^2 * 10^decimals_0 / 10^decimals_1`
pub fn sqrt_price_x96_to_price(sqrt_price_x96: U256, decimals_0: u8, decimals_1: u8) -> BigDecimal {
    // 2^-192 == 5^192 * 10^-192
    let fractional_bits = 2 * RESOLUTION_96;
    let sqrt_price = u256_to_biguint(sqrt_price_x96);
    let numerator = &sqrt_price * &sqrt_price * BigUint::from(5u32).pow(fractional_bits);
    let scale = i64::from(fractional_bits) + i64::from(decimals_1) - i64::from(decimals_0);
    BigDecimal::new(BigInt::from(numerator), scale).normalized()
}

/// Convert a tick index into a Q64.96 sqrt price, rounded to the nearest integer.
///
/// # Parameters
/// - `tick_index` - A tick index within `[MIN_TICK, MAX_TICK]`
///
/// # Returns
/// - `round(sqrt(1.0001^tick_index) * 2^96)`
pub fn tick_to_sqrt_price_x96(tick_index: i32) -> Result<U256, CoreError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick_index) {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    let sqrt_price = try_sqrt(&tick_base_pow(tick_index))?;
    try_decimal_to_u256(&(sqrt_price * u256_to_decimal(Q96)), RoundingMode::HalfUp)
}

/// Get the tick index of a Q64.96 sqrt price: the greatest tick whose sqrt
/// price does not exceed it.
///
/// Sqrt prices between `tick_to_sqrt_price_x96(MAX_TICK)` and `MAX_SQRT_RATIO`
/// are valid pool prices and map to `MAX_TICK`.
///
/// # Parameters
/// - `sqrt_price_x96` - The sqrt price
///
/// # Returns
/// - The tick index, or `SQRT_PRICE_OUT_OF_BOUNDS` below the tick grid or at
///   and above `MAX_SQRT_RATIO`
pub fn tick_at_sqrt_price(sqrt_price_x96: U256) -> Result<i32, CoreError> {
    if sqrt_price_x96 >= MAX_SQRT_RATIO {
        debug!(target: "log", "Sqrt price {} is not below the max sqrt ratio", sqrt_price_x96);
        return Err(SQRT_PRICE_OUT_OF_BOUNDS);
    }
    let ratio = sqrt_price_x96.as_f64() / Q96.as_f64();
    let estimate = 2.0 * libm::log(ratio) / libm::log(1.0001);
    search_floor_tick(estimate, &sqrt_price_x96, tick_to_sqrt_price_x96, SQRT_PRICE_OUT_OF_BOUNDS, true)
}

/// Starting at a floating point estimate, walk to the greatest tick whose
/// value does not exceed `target`. `value_at_tick` must be strictly increasing.
/// A target above the value at `MAX_TICK` yields `MAX_TICK` when
/// `saturate_at_max` is set and `out_of_bounds` otherwise.
fn search_floor_tick<T, F>(estimate: f64, target: &T, value_at_tick: F, out_of_bounds: CoreError, saturate_at_max: bool) -> Result<i32, CoreError>
where
    T: PartialOrd,
    F: Fn(i32) -> Result<T, CoreError>,
{
    let mut tick_index = if estimate.is_nan() {
        0
    } else {
        libm::floor(estimate.clamp(f64::from(MIN_TICK), f64::from(MAX_TICK))) as i32
    };

    let mut value = value_at_tick(tick_index)?;
    while value > *target {
        if tick_index == MIN_TICK {
            debug!(target: "log", "Value below the tick grid, estimate {}", estimate);
            return Err(out_of_bounds);
        }
        tick_index -= 1;
        value = value_at_tick(tick_index)?;
    }

    loop {
        if tick_index == MAX_TICK {
            if *target > value && !saturate_at_max {
                debug!(target: "log", "Value above the tick grid, estimate {}", estimate);
                return Err(out_of_bounds);
            }
            return Ok(tick_index);
        }
        let next_value = value_at_tick(tick_index + 1)?;
        if next_value > *target {
            return Ok(tick_index);
        }
        tick_index += 1;
        value = next_value;
    }
}

/// Get the full range tick bounds for a tick spacing.
///
/// # Parameters
/// - `tick_spacing` - The tick spacing
///
/// # Returns
/// - The outermost usable ticks of the grid
pub fn full_range_ticks(tick_spacing: u16) -> Result<TickRange, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    let tick_spacing = i32::from(tick_spacing);
    let max_usable = MAX_TICK / tick_spacing * tick_spacing;
    Ok(TickRange {
        tick_lower_index: -max_usable,
        tick_upper_index: max_usable,
    })
}

/// Check whether a tick index lies on the grid and is a multiple of the tick spacing.
pub fn is_tick_usable(tick_index: i32, tick_spacing: u16) -> bool {
    tick_spacing != 0 && (MIN_TICK..=MAX_TICK).contains(&tick_index) && tick_index % i32::from(tick_spacing) == 0
}

/// Order two tick indexes into a range.
pub fn order_tick_indexes(tick_index_1: i32, tick_index_2: i32) -> TickRange {
    if tick_index_1 < tick_index_2 {
        TickRange {
            tick_lower_index: tick_index_1,
            tick_upper_index: tick_index_2,
        }
    } else {
        TickRange {
            tick_lower_index: tick_index_2,
            tick_upper_index: tick_index_1,
        }
    }
}

/// Validate a position range before any arithmetic is done with it.
///
/// # Parameters
/// - `tick_lower_index` - The lower tick of the range
/// - `tick_upper_index` - The upper tick of the range
/// - `tick_spacing` - The pool tick spacing
pub fn validate_tick_range(tick_lower_index: i32, tick_upper_index: i32, tick_spacing: u16) -> Result<(), CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    for tick_index in [tick_lower_index, tick_upper_index] {
        if !(MIN_TICK..=MAX_TICK).contains(&tick_index) {
            return Err(TICK_INDEX_OUT_OF_BOUNDS);
        }
    }
    if tick_lower_index >= tick_upper_index {
        return Err(INVALID_TICK_RANGE);
    }
    if !is_tick_usable(tick_lower_index, tick_spacing) || !is_tick_usable(tick_upper_index, tick_spacing) {
        return Err(TICK_NOT_USABLE);
    }
    Ok(())
}

/// Invert a price (token0 per token1 instead of token1 per token0).
pub fn invert_price(price: &BigDecimal) -> Result<BigDecimal, CoreError> {
    ensure_positive_price(price)?;
    try_div(&BigDecimal::from(1), price)
}
