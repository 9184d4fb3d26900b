//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{try_mul_div, CoreError, PositionRatio, PositionStatus, BPS_DENOMINATOR};

use ethnum::U256;

use super::{full_range_ticks, order_tick_indexes, tick_to_sqrt_price_x96};

/// Check if a position is in range.
/// When a position is in range it is earning fees
///
/// # Parameters
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_index_1` - The first tick index of the position
/// - `tick_index_2` - The second tick index of the position
///
/// # Returns
/// - A boolean value indicating if the position is in range
pub fn is_position_in_range(sqrt_price_x96: U256, tick_index_1: i32, tick_index_2: i32) -> Result<bool, CoreError> {
    Ok(position_status(sqrt_price_x96, tick_index_1, tick_index_2)? == PositionStatus::PriceInRange)
}

/// Check if a position spans the widest range the tick spacing allows.
pub fn is_full_range_position(tick_index_1: i32, tick_index_2: i32, tick_spacing: u16) -> bool {
    full_range_ticks(tick_spacing).map_or(false, |full_range| full_range == order_tick_indexes(tick_index_1, tick_index_2))
}

/// Calculate the status of a position
/// The status can be one of four values:
/// - InRange: The position is in range
/// - BelowRange: The position is below the range
/// - AboveRange: The position is above the range
/// - Invalid: Both ticks are equal
///
/// # Parameters
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_index_1` - The first tick index of the position
/// - `tick_index_2` - The second tick index of the position
///
/// # Returns
/// - A PositionStatus enum value indicating the status of the position
pub fn position_status(sqrt_price_x96: U256, tick_index_1: i32, tick_index_2: i32) -> Result<PositionStatus, CoreError> {
    if tick_index_1 == tick_index_2 {
        return Ok(PositionStatus::Invalid);
    }

    let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
    let sqrt_price_lower = tick_to_sqrt_price_x96(tick_range.tick_lower_index)?;
    let sqrt_price_upper = tick_to_sqrt_price_x96(tick_range.tick_upper_index)?;

    let status = if sqrt_price_x96 <= sqrt_price_lower {
        PositionStatus::PriceBelowRange
    } else if sqrt_price_x96 >= sqrt_price_upper {
        PositionStatus::PriceAboveRange
    } else {
        PositionStatus::PriceInRange
    };
    Ok(status)
}

/// Calculate the token 0 / token 1 value split of a (ficticious) position, in basis points
///
/// # Parameters
/// - `sqrt_price_x96` - The current pool sqrt price
/// - `tick_index_1` - The first tick index of the position
/// - `tick_index_2` - The second tick index of the position
///
/// # Returns
/// - A PositionRatio struct containing the share of token 0 and token 1
pub fn position_ratio(sqrt_price_x96: U256, tick_index_1: i32, tick_index_2: i32) -> Result<PositionRatio, CoreError> {
    let ratio = match position_status(sqrt_price_x96, tick_index_1, tick_index_2)? {
        PositionStatus::Invalid => PositionRatio { ratio_0: 0, ratio_1: 0 },
        PositionStatus::PriceBelowRange => PositionRatio {
            ratio_0: BPS_DENOMINATOR,
            ratio_1: 0,
        },
        PositionStatus::PriceAboveRange => PositionRatio {
            ratio_0: 0,
            ratio_1: BPS_DENOMINATOR,
        },
        PositionStatus::PriceInRange => {
            let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
            let lower_sqrt_price = tick_to_sqrt_price_x96(tick_range.tick_lower_index)?;
            let upper_sqrt_price = tick_to_sqrt_price_x96(tick_range.tick_upper_index)?;

            let l: U256 = U256::ONE << 64;

            // Both deposits valued in token 1, scaled by 2^96.
            let deposit_0 = try_mul_div(l * (upper_sqrt_price - sqrt_price_x96), sqrt_price_x96, upper_sqrt_price, false)?;
            let deposit_1 = l * (sqrt_price_x96 - lower_sqrt_price);
            let total_deposit = deposit_0 + deposit_1;

            let ratio_0 = try_mul_div(deposit_0, U256::from(BPS_DENOMINATOR), total_deposit, false)?.as_u128() as u16;
            PositionRatio {
                ratio_0,
                ratio_1: BPS_DENOMINATOR - ratio_0,
            }
        }
    };
    Ok(ratio)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Q96, TICK_INDEX_OUT_OF_BOUNDS};

    fn u256(value: &str) -> U256 {
        U256::from_str_radix(value, 10).unwrap()
    }

    #[test]
    fn test_is_position_in_range() {
        assert_eq!(is_position_in_range(Q96, -5, 5), Ok(true));
        assert_eq!(is_position_in_range(Q96, 0, 5), Ok(false));
        assert_eq!(is_position_in_range(Q96, -5, 0), Ok(false));
        assert_eq!(is_position_in_range(Q96, -5, -1), Ok(false));
        assert_eq!(is_position_in_range(Q96, 1, 5), Ok(false));
        assert_eq!(is_position_in_range(Q96, 5, -5), Ok(true));
    }

    #[test]
    fn test_position_status() {
        let lower = u256("78833030112140176575862854579");
        let upper = u256("79625275426524748796330556127");
        assert_eq!(position_status(lower - U256::ONE, -100, 100), Ok(PositionStatus::PriceBelowRange));
        assert_eq!(position_status(lower, -100, 100), Ok(PositionStatus::PriceBelowRange));
        assert_eq!(position_status(lower + U256::ONE, -100, 100), Ok(PositionStatus::PriceInRange));
        assert_eq!(position_status(Q96, -100, 100), Ok(PositionStatus::PriceInRange));
        assert_eq!(position_status(upper - U256::ONE, -100, 100), Ok(PositionStatus::PriceInRange));
        assert_eq!(position_status(upper, -100, 100), Ok(PositionStatus::PriceAboveRange));
        assert_eq!(position_status(upper + U256::ONE, -100, 100), Ok(PositionStatus::PriceAboveRange));
        assert_eq!(position_status(Q96, 100, 100), Ok(PositionStatus::Invalid));
        assert_eq!(position_status(Q96, -100, 900000), Err(TICK_INDEX_OUT_OF_BOUNDS));
    }

    #[test]
    fn test_position_ratio() {
        let ratio_1 = position_ratio(u256("78833030112140176575862854579"), -100, 100).unwrap();
        assert_eq!(ratio_1, PositionRatio { ratio_0: 10000, ratio_1: 0 });

        let ratio_2 = position_ratio(Q96, -100, 100).unwrap();
        assert_eq!(ratio_2, PositionRatio { ratio_0: 5000, ratio_1: 5000 });

        let ratio_3 = position_ratio(u256("79625275426524748796330556127"), -100, 100).unwrap();
        assert_eq!(ratio_3, PositionRatio { ratio_0: 0, ratio_1: 10000 });

        let ratio_4 = position_ratio(Q96, 0, 0).unwrap();
        assert_eq!(ratio_4, PositionRatio { ratio_0: 0, ratio_1: 0 });

        let ratio_5 = position_ratio(tick_to_sqrt_price_x96(50).unwrap(), -100, 100).unwrap();
        assert_eq!(ratio_5, PositionRatio { ratio_0: 2504, ratio_1: 7496 });

        let ratio_6 = position_ratio(tick_to_sqrt_price_x96(-50).unwrap(), 100, -100).unwrap();
        assert_eq!(ratio_6, PositionRatio { ratio_0: 7495, ratio_1: 2505 });
    }

    #[test]
    fn test_is_full_range_position() {
        assert!(is_full_range_position(-887220, 887220, 60));
        assert!(is_full_range_position(887220, -887220, 60));
        assert!(!is_full_range_position(-887160, 887220, 60));
        assert!(is_full_range_position(-887272, 887272, 1));
        assert!(!is_full_range_position(-887272, 887272, 0));
    }
}
