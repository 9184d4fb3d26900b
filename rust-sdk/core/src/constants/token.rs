//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// Denominator of every basis-point quantity (slippage tolerance, position ratio).
pub const BPS_DENOMINATOR: u16 = 10_000;
