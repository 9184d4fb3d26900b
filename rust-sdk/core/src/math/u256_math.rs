//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{CoreError, AMOUNT_EXCEEDS_MAX_U128, ARITHMETIC_OVERFLOW};
use bigdecimal::num_bigint::{BigInt, BigUint};
use bigdecimal::num_traits::Zero;
use ethnum::U256;

const U256_BYTES: usize = 32;

pub fn u256_to_biguint(value: U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes())
}

pub fn try_biguint_to_u256(value: &BigUint) -> Result<U256, CoreError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > U256_BYTES {
        return Err(ARITHMETIC_OVERFLOW);
    }
    let mut words = [0u8; U256_BYTES];
    words[U256_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(U256::from_be_bytes(words))
}

pub fn try_bigint_to_u256(value: &BigInt) -> Result<U256, CoreError> {
    let value = value.to_biguint().ok_or(ARITHMETIC_OVERFLOW)?;
    try_biguint_to_u256(&value)
}

pub fn try_into_u128(value: U256) -> Result<u128, CoreError> {
    u128::try_from(value).map_err(|_| AMOUNT_EXCEEDS_MAX_U128)
}

/// Computes `a * b / denominator` with a full-width intermediate product.
///
/// # Parameters
/// - `a`, `b` - The factors
/// - `denominator` - The divisor, must be non-zero
/// - `round_up` - Round the quotient up instead of truncating it
///
/// # Returns
/// - The quotient, or `ARITHMETIC_OVERFLOW` if it does not fit 256 bits
pub fn try_mul_div(a: U256, b: U256, denominator: U256, round_up: bool) -> Result<U256, CoreError> {
    if denominator == U256::ZERO {
        return Err(ARITHMETIC_OVERFLOW);
    }

    let product = u256_to_biguint(a) * u256_to_biguint(b);
    let denominator = u256_to_biguint(denominator);
    let mut quotient = &product / &denominator;
    if round_up && !(&product % &denominator).is_zero() {
        quotient += 1u32;
    }

    try_biguint_to_u256(&quotient)
}
