//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

pub type CoreError = &'static str;

pub const INVALID_TICK_RANGE: CoreError = "Invalid tick range";

pub const TICK_NOT_USABLE: CoreError = "Tick is not a multiple of the tick spacing";

pub const INVALID_TICK_SPACING: CoreError = "Invalid tick spacing";

pub const TICK_INDEX_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";

pub const SQRT_PRICE_OUT_OF_BOUNDS: CoreError = "Sqrt price out of bounds";

pub const PRICE_OUT_OF_BOUNDS: CoreError = "Price out of bounds";

pub const DEGENERATE_PRICE: CoreError = "Current price is at or past the range boundary";

pub const NON_POSITIVE_PRICE: CoreError = "Price must be positive";

pub const NEGATIVE_AMOUNT: CoreError = "Amount must not be negative";

pub const FEE_GROWTH_UNDERFLOW: CoreError = "Fee growth difference is negative";

pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

pub const AMOUNT_EXCEEDS_MAX_U128: CoreError = "Amount exceeds max u128";

pub const INVALID_DECIMAL_STRING: CoreError = "Invalid decimal string";

pub const TOO_MANY_DECIMALS: CoreError = "Amount has more fractional digits than the token decimals";

pub const INVALID_SLIPPAGE_TOLERANCE: CoreError = "Invalid slippage tolerance";
