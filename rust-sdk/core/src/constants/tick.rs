//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

/// The minimum tick index.
pub const MIN_TICK: i32 = -887272;

/// The maximum tick index.
pub const MAX_TICK: i32 = 887272;

/// The price ratio between two neighbouring ticks, `1.0001`, as an unscaled
/// integer and its decimal scale.
pub const TICK_BASE_DIGITS: u32 = 10001;
pub const TICK_BASE_SCALE: i64 = 4;

/// The smallest sqrt price a pool accepts, the protocol's `getSqrtRatioAtTick(MIN_TICK)`.
pub const MIN_SQRT_RATIO: U256 = U256::from_words(0, 4295128739);

/// One above the largest sqrt price a pool accepts, the protocol's `getSqrtRatioAtTick(MAX_TICK)`.
pub const MAX_SQRT_RATIO: U256 = U256::from_words(0xfffd8963, 0xefd1fc6a506488495d951d5263988d26);
