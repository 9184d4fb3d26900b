//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;
use libm::{floor, log, pow};

use crate::{MAX_TICK, MIN_TICK, Q96};

/// Convert a tick index into a decimal-adjusted price as a float.
/// For display only, use `tick_to_price` for anything that feeds back into math.
///
/// # Parameters
/// - `tick_index` - The tick index
/// - `decimals_0` - The number of decimals of token 0
/// - `decimals_1` - The number of decimals of token 1
///
/// # Returns
/// - `1.0001^tick_index * 10^decimals_0 / 10^decimals_1`
pub fn tick_index_to_price_f64(tick_index: i32, decimals_0: u8, decimals_1: u8) -> f64 {
    pow(1.0001, f64::from(tick_index)) * power_of_ten(decimals_0, decimals_1)
}

/// Convert a Q64.96 sqrt price into a decimal-adjusted price as a float.
pub fn sqrt_price_x96_to_price_f64(sqrt_price_x96: U256, decimals_0: u8, decimals_1: u8) -> f64 {
    let sqrt_price = sqrt_price_x96.as_f64() / Q96.as_f64();
    sqrt_price * sqrt_price * power_of_ten(decimals_0, decimals_1)
}

/// Convert a decimal-adjusted float price into a tick index, rounded down and
/// clamped to the tick grid. Non-positive prices map to `MIN_TICK`.
pub fn price_to_tick_index_f64(price: f64, decimals_0: u8, decimals_1: u8) -> i32 {
    if price.is_nan() || price <= 0.0 {
        return MIN_TICK;
    }
    let raw_price = price / power_of_ten(decimals_0, decimals_1);
    let tick_index = floor(log(raw_price) / log(1.0001));
    tick_index.clamp(f64::from(MIN_TICK), f64::from(MAX_TICK)) as i32
}

fn power_of_ten(decimals_0: u8, decimals_1: u8) -> f64 {
    pow(10.0, f64::from(decimals_0) - f64::from(decimals_1))
}
