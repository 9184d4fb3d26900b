//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use bigdecimal::BigDecimal;

/// Raw token amounts a liquidity magnitude decomposes into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAmounts {
    pub amount_0: u128,
    pub amount_1: u128,
}

/// Human-unit deposit pair for the liquidity form.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositAmounts {
    pub amount_0: BigDecimal,
    pub amount_1: BigDecimal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecreaseLiquidityQuote {
    pub liquidity_delta: u128,
    pub token_est_0: u128,
    pub token_est_1: u128,
    pub token_min_0: u128,
    pub token_min_1: u128,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncreaseLiquidityQuote {
    pub liquidity_delta: u128,
    pub token_est_0: u128,
    pub token_est_1: u128,
    pub token_max_0: u128,
    pub token_max_1: u128,
}
