//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod apr;
mod fees;
mod liquidity;

pub use apr::*;
pub use fees::*;
pub use liquidity::*;
