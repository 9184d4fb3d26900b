//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::num::NonZeroU64;

use ethnum::U256;

/// Number of fractional bits of a Q64.96 sqrt price.
pub const RESOLUTION_96: u32 = 96;

/// Number of fractional bits of a Q128.128 fee growth value.
pub const RESOLUTION_128: u32 = 128;

/// 2^96
pub const Q96: U256 = U256::from_words(0, 1 << 96);

/// 2^128
pub const Q128: U256 = U256::from_words(1, 0);

/// Significant digits kept by every rounded decimal operation
/// (powers of 1.0001, square roots, divisions).
pub const DECIMAL_PRECISION: NonZeroU64 = match NonZeroU64::new(80) {
    Some(precision) => precision,
    None => panic!("decimal precision must be non-zero"),
};
