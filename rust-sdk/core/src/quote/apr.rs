//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{CoreError, INVALID_TICK_RANGE, INVALID_TICK_SPACING};

/// Share of a pool's APR credited to a price range, for display.
///
/// The pool APR is divided by the number of tick spacings the range covers
/// and rounded to two decimal places.
///
/// # Parameters
/// - `pool_apr`: The pool APR, in percent
/// - `tick_lower_index`: One end of the range
/// - `tick_upper_index`: The other end of the range
/// - `tick_spacing`: The pool tick spacing
///
/// # Returns
/// - `f64`: The range APR, in percent
pub fn apr_for_range(pool_apr: f64, tick_lower_index: i32, tick_upper_index: i32, tick_spacing: u16) -> Result<f64, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    if tick_lower_index == tick_upper_index {
        return Err(INVALID_TICK_RANGE);
    }

    let width = f64::from(tick_upper_index.abs_diff(tick_lower_index)) / f64::from(tick_spacing);
    Ok(libm::round(pool_apr / width * 100.0) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(36.5, -60, 60, 60, 18.25)]
    #[case(36.5, 60, -60, 60, 18.25)]
    #[case(10.0, 0, 60, 60, 10.0)]
    #[case(10.0, 0, 180, 60, 3.33)]
    #[case(10.0, 0, 30, 60, 20.0)]
    #[case(0.0, -600, 600, 10, 0.0)]
    fn test_apr_for_range(#[case] pool_apr: f64, #[case] lower: i32, #[case] upper: i32, #[case] tick_spacing: u16, #[case] expected: f64) {
        assert_relative_eq!(apr_for_range(pool_apr, lower, upper, tick_spacing).unwrap(), expected);
    }

    #[test]
    fn test_apr_for_range_errors() {
        assert_eq!(apr_for_range(36.5, 60, 60, 60), Err(INVALID_TICK_RANGE));
        assert_eq!(apr_for_range(36.5, -60, 60, 0), Err(INVALID_TICK_SPACING));
    }
}
