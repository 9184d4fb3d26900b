//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod decimal;
mod liquidity;
mod position;
mod tick;
mod token;
mod u256_math;

#[cfg(feature = "floats")]
mod price;

pub use liquidity::*;
pub use position::*;
pub use tick::*;
pub use token::*;
pub use u256_math::*;

#[cfg(feature = "floats")]
pub use price::*;
