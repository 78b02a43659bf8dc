//! The design philosophy underlying `group_house` is pedagogical, yet mathematically rigorous.
//! Each module isolates one classical construction from elementary number theory,
//! showing how exact arbitrary-precision arithmetic composes into a complete
//! picture of the multiplicative group of residues.
//! Signed division with remainder.
//!
//! This module provides the division primitive everything else in the
//! crate is built on: division with remainder under two rounding
//! conventions.  The default convention keeps the remainder non-negative
//! regardless of the signs of the operands; the balanced convention
//! recenters the remainder around zero, which halves the worst-case
//! remainder magnitude and is what keeps the Euclidean loops elsewhere in
//! the crate short.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::error::{ArithmeticError, Result};

/// Rounding convention used by [`divide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Remainder in `[0, |denom|)`.
    ///
    /// For a positive divisor this is ordinary floor division.  For a
    /// negative divisor the floor quotient is shifted by one so the
    /// remainder stays non-negative.
    #[default]
    Floor,
    /// Remainder in `(-|denom|/2, |denom|/2]`.
    ///
    /// Starting from the floor result, a remainder above `|denom|/2` is
    /// reduced by `|denom|` and the quotient stepped by `sign(denom)`.
    Balanced,
}

/// Divides `num` by `denom`, returning the quotient and remainder.
///
/// The pair `(q, r)` always satisfies `num == q * denom + r`, with `r`
/// confined to the range selected by `rounding`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `denom` is zero.
pub fn divide(num: &BigInt, denom: &BigInt, rounding: Rounding) -> Result<(BigInt, BigInt)> {
    if denom.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    let (mut quotient, mut remainder) = num.div_mod_floor(denom);
    // Floor remainders follow the sign of the divisor; shift negative
    // remainders up by |denom| to land in [0, |denom|).
    if remainder.is_negative() {
        quotient += 1;
        remainder += denom.abs();
    }

    if rounding == Rounding::Balanced && remainder > denom.abs() / 2 {
        quotient += denom.signum();
        remainder -= denom.abs();
    }

    Ok((quotient, remainder))
}

/// Remainder of `num` modulo `denom` under the given rounding convention.
///
/// Shorthand for the second component of [`divide`].
pub fn remainder(num: &BigInt, denom: &BigInt, rounding: Rounding) -> Result<BigInt> {
    divide(num, denom, rounding).map(|(_, r)| r)
}
