//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;
use log::debug;

use crate::{
    try_into_u128, try_mul_div, validate_tick_range, CollectFeesQuote, CoreError, FeesOwed, PoolFacade, PositionFacade, TickFacade, AMOUNT_EXCEEDS_MAX_U128, FEE_GROWTH_UNDERFLOW,
    Q128,
};

/// Calculate the fees a position accrued since its last fee-growth checkpoint.
///
/// # Parameters
/// - `position`: The position state
/// - `pool`: The pool state
/// - `tick_lower`: The fee bookkeeping of the position's lower tick
/// - `tick_upper`: The fee bookkeeping of the position's upper tick
///
/// # Returns
/// - `FeesOwed`: The fees owed per token, truncated, or an error when the
///   position range is not a usable range of the pool
pub fn fees_owed(position: PositionFacade, pool: PoolFacade, tick_lower: TickFacade, tick_upper: TickFacade) -> Result<FeesOwed, CoreError> {
    validate_tick_range(position.tick_lower_index, position.tick_upper_index, pool.tick_spacing)?;

    let fee_growth_inside_0 = fee_growth_inside(
        pool.tick_current_index,
        position.tick_lower_index,
        position.tick_upper_index,
        pool.fee_growth_global_0_x128,
        tick_lower.fee_growth_outside_0_x128,
        tick_upper.fee_growth_outside_0_x128,
    )?;
    let fee_growth_inside_1 = fee_growth_inside(
        pool.tick_current_index,
        position.tick_lower_index,
        position.tick_upper_index,
        pool.fee_growth_global_1_x128,
        tick_lower.fee_growth_outside_1_x128,
        tick_upper.fee_growth_outside_1_x128,
    )?;

    Ok(FeesOwed {
        fee_owed_0: fee_since_checkpoint(position.liquidity, fee_growth_inside_0, position.fee_growth_inside_0_last_x128)?,
        fee_owed_1: fee_since_checkpoint(position.liquidity, fee_growth_inside_1, position.fee_growth_inside_1_last_x128)?,
    })
}

/// Calculate what collecting fees from a position would pay out: the fees
/// already credited to the position plus the fees accrued since its checkpoint.
///
/// # Parameters
/// - `position`: The position state
/// - `pool`: The pool state
/// - `tick_lower`: The fee bookkeeping of the position's lower tick
/// - `tick_upper`: The fee bookkeeping of the position's upper tick
///
/// # Returns
/// - `CollectFeesQuote`: The total fees per token
pub fn collect_fees_quote(
    position: PositionFacade,
    pool: PoolFacade,
    tick_lower: TickFacade,
    tick_upper: TickFacade,
) -> Result<CollectFeesQuote, CoreError> {
    let fees = fees_owed(position, pool, tick_lower, tick_upper)?;

    Ok(CollectFeesQuote {
        fee_owed_0: position.tokens_owed_0.checked_add(fees.fee_owed_0).ok_or(AMOUNT_EXCEEDS_MAX_U128)?,
        fee_owed_1: position.tokens_owed_1.checked_add(fees.fee_owed_1).ok_or(AMOUNT_EXCEEDS_MAX_U128)?,
    })
}

fn fee_growth_inside(
    tick_current_index: i32,
    tick_lower_index: i32,
    tick_upper_index: i32,
    fee_growth_global: U256,
    fee_growth_outside_lower: U256,
    fee_growth_outside_upper: U256,
) -> Result<U256, CoreError> {
    if tick_current_index < tick_lower_index {
        Ok(fee_growth_outside_lower)
    } else if tick_current_index > tick_upper_index {
        Ok(fee_growth_outside_upper)
    } else {
        fee_growth_global
            .checked_sub(fee_growth_outside_lower)
            .and_then(|growth| growth.checked_sub(fee_growth_outside_upper))
            .ok_or_else(|| {
                debug!(target: "log", "Fee growth outside exceeds global {}", fee_growth_global);
                FEE_GROWTH_UNDERFLOW
            })
    }
}

fn fee_since_checkpoint(liquidity: u128, fee_growth_inside: U256, fee_growth_inside_last: U256) -> Result<u128, CoreError> {
    let fee_growth_delta = fee_growth_inside.checked_sub(fee_growth_inside_last).ok_or(FEE_GROWTH_UNDERFLOW)?;
    let fee = try_mul_div(U256::from(liquidity), fee_growth_delta, Q128, false)?;
    try_into_u128(fee)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q128(value: u128) -> U256 {
        Q128 * U256::from(value)
    }

    fn test_pool(tick_current_index: i32, fee_growth_global_0: U256, fee_growth_global_1: U256) -> PoolFacade {
        PoolFacade {
            tick_spacing: 60,
            tick_current_index,
            fee_growth_global_0_x128: fee_growth_global_0,
            fee_growth_global_1_x128: fee_growth_global_1,
        }
    }

    fn test_position(liquidity: u128, fee_growth_inside_last: U256) -> PositionFacade {
        PositionFacade {
            liquidity,
            tick_lower_index: -600,
            tick_upper_index: 600,
            fee_growth_inside_0_last_x128: fee_growth_inside_last,
            fee_growth_inside_1_last_x128: fee_growth_inside_last,
            tokens_owed_0: 0,
            tokens_owed_1: 0,
        }
    }

    fn test_tick(fee_growth_outside_0: U256, fee_growth_outside_1: U256) -> TickFacade {
        TickFacade {
            fee_growth_outside_0_x128: fee_growth_outside_0,
            fee_growth_outside_1_x128: fee_growth_outside_1,
        }
    }

    #[test]
    fn test_fees_owed_in_range() {
        let pool = test_pool(0, q128(10), q128(20));
        let tick_lower = test_tick(q128(2), q128(4));
        let tick_upper = test_tick(q128(3), q128(5));
        let fees = fees_owed(test_position(1000, q128(1)), pool, tick_lower, tick_upper).unwrap();
        assert_eq!(fees, FeesOwed { fee_owed_0: 4000, fee_owed_1: 10000 });
    }

    #[test]
    fn test_fees_owed_at_lower_bound() {
        let pool = test_pool(-600, q128(10), q128(20));
        let tick_lower = test_tick(q128(2), q128(4));
        let tick_upper = test_tick(q128(3), q128(5));
        let fees = fees_owed(test_position(1000, q128(1)), pool, tick_lower, tick_upper).unwrap();
        assert_eq!(fees, FeesOwed { fee_owed_0: 4000, fee_owed_1: 10000 });
    }

    #[test]
    fn test_fees_owed_at_upper_bound() {
        let pool = test_pool(600, q128(10), q128(20));
        let tick_lower = test_tick(q128(2), q128(4));
        let tick_upper = test_tick(q128(3), q128(5));
        let fees = fees_owed(test_position(1000, q128(1)), pool, tick_lower, tick_upper).unwrap();
        assert_eq!(fees, FeesOwed { fee_owed_0: 4000, fee_owed_1: 10000 });
    }

    #[test]
    fn test_fees_owed_below_range() {
        let pool = test_pool(-601, q128(10), q128(20));
        let tick_lower = test_tick(q128(2), q128(4));
        let tick_upper = test_tick(q128(3), q128(5));
        let fees = fees_owed(test_position(1000, q128(1)), pool, tick_lower, tick_upper).unwrap();
        assert_eq!(fees, FeesOwed { fee_owed_0: 1000, fee_owed_1: 3000 });
    }

    #[test]
    fn test_fees_owed_above_range() {
        let pool = test_pool(601, q128(10), q128(20));
        let tick_lower = test_tick(q128(2), q128(4));
        let tick_upper = test_tick(q128(3), q128(5));
        let fees = fees_owed(test_position(1000, q128(1)), pool, tick_lower, tick_upper).unwrap();
        assert_eq!(fees, FeesOwed { fee_owed_0: 2000, fee_owed_1: 4000 });
    }

    #[test]
    fn test_fees_owed_rejects_unusable_range() {
        let tick_lower = test_tick(q128(2), q128(4));
        let tick_upper = test_tick(q128(3), q128(5));
        let position = test_position(1000, q128(1));

        let pool = PoolFacade {
            tick_spacing: 64,
            ..test_pool(0, q128(10), q128(20))
        };
        assert_eq!(fees_owed(position, pool, tick_lower, tick_upper), Err(crate::TICK_NOT_USABLE));

        let pool = PoolFacade {
            tick_spacing: 0,
            ..test_pool(0, q128(10), q128(20))
        };
        assert_eq!(fees_owed(position, pool, tick_lower, tick_upper), Err(crate::INVALID_TICK_SPACING));

        let position = PositionFacade {
            tick_lower_index: 600,
            tick_upper_index: -600,
            ..position
        };
        let pool = test_pool(0, q128(10), q128(20));
        assert_eq!(collect_fees_quote(position, pool, tick_lower, tick_upper), Err(crate::INVALID_TICK_RANGE));
    }

    #[test]
    fn test_fees_owed_truncates() {
        let pool = test_pool(0, Q128 >> 1, Q128 >> 1);
        let fees = fees_owed(test_position(3, U256::ZERO), pool, TickFacade::default(), TickFacade::default()).unwrap();
        assert_eq!(fees, FeesOwed { fee_owed_0: 1, fee_owed_1: 1 });
    }

    #[test]
    fn test_fees_owed_underflow() {
        let pool = test_pool(0, q128(4), q128(4));
        let tick_lower = test_tick(q128(2), q128(2));
        let tick_upper = test_tick(q128(3), q128(1));
        let result = fees_owed(test_position(1000, U256::ZERO), pool, tick_lower, tick_upper);
        assert_eq!(result, Err(FEE_GROWTH_UNDERFLOW));

        let pool = test_pool(0, q128(4), q128(4));
        let result = fees_owed(test_position(1000, q128(5)), pool, TickFacade::default(), TickFacade::default());
        assert_eq!(result, Err(FEE_GROWTH_UNDERFLOW));
    }

    #[test]
    fn test_fees_owed_exceeds_u128() {
        let pool = test_pool(0, q128(2), q128(0));
        let result = fees_owed(test_position(u128::MAX, U256::ZERO), pool, TickFacade::default(), TickFacade::default());
        assert_eq!(result, Err(AMOUNT_EXCEEDS_MAX_U128));
    }

    #[test]
    fn test_fees_owed_grows_with_global() {
        let tick_lower = test_tick(q128(1), q128(1));
        let tick_upper = test_tick(q128(1), q128(1));
        let position = test_position(1_000_000, q128(2));
        let mut previous = FeesOwed::default();
        for step in 0..50u128 {
            let global = q128(4) + (Q128 >> 7) * U256::from(step * step);
            let fees = fees_owed(position, test_pool(0, global, global), tick_lower, tick_upper).unwrap();
            assert!(fees.fee_owed_0 >= previous.fee_owed_0);
            assert!(fees.fee_owed_1 >= previous.fee_owed_1);
            previous = fees;
        }
        assert!(previous.fee_owed_0 > 0);
    }

    #[test]
    fn test_collect_fees_quote() {
        let pool = test_pool(0, q128(10), q128(20));
        let tick_lower = test_tick(q128(2), q128(4));
        let tick_upper = test_tick(q128(3), q128(5));
        let position = PositionFacade {
            tokens_owed_0: 7,
            tokens_owed_1: 11,
            ..test_position(1000, q128(1))
        };
        let quote = collect_fees_quote(position, pool, tick_lower, tick_upper).unwrap();
        assert_eq!(quote, CollectFeesQuote { fee_owed_0: 4007, fee_owed_1: 10011 });

        let position = PositionFacade {
            tokens_owed_0: u128::MAX,
            ..test_position(1000, q128(1))
        };
        assert_eq!(collect_fees_quote(position, pool, tick_lower, tick_upper), Err(AMOUNT_EXCEEDS_MAX_U128));
    }
}
