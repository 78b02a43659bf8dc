//! The design philosophy underlying `group_house` is pedagogical, yet mathematically rigorous.
//! Each module isolates one classical construction from elementary number theory,
//! showing how exact arbitrary-precision arithmetic composes into a complete
//! picture of the multiplicative group of residues.
//! The Jacobi symbol.
//!
//! The Jacobi symbol `(a | b)` generalizes the Legendre quadratic-residue
//! symbol to arbitrary odd denominators.  The computation runs the
//! classical reduction: reduce `a` modulo `b`, strip factors of two with
//! the second supplementary law, then apply quadratic reciprocity and
//! swap the arguments.  Each swap strictly shrinks the denominator, so
//! the loop below terminates after `O(log b)` rounds; the recursive
//! statement `jacobi(a, b) = sign * jacobi(b, a')` lives here as a loop
//! for the same stack-depth reason as the Euclidean suite.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::division::{remainder, Rounding};
use crate::error::{ArithmeticError, Result};
use crate::euclid::gcd;
use crate::valuation::padic;

/// Computes the Jacobi symbol `(a | b)` for an odd `b`.
///
/// Returns 1, -1, or 0 (the latter exactly when `a` and `b` share a
/// factor).
///
/// # Errors
///
/// Returns [`ArithmeticError::UndefinedJacobiSymbol`] when `b` is even.
pub fn jacobi(a: &BigInt, b: &BigInt) -> Result<i8> {
    let two = BigInt::from(2);
    if (b % &two).is_zero() {
        return Err(ArithmeticError::UndefinedJacobiSymbol {
            denominator: b.clone(),
        });
    }

    let four = BigInt::from(4);
    let eight = BigInt::from(8);
    let three = BigInt::from(3);
    let five = BigInt::from(5);

    let mut num = a.clone();
    let mut denom = b.clone();
    let mut sign = 1i8;
    loop {
        if denom.is_one() {
            return Ok(sign);
        }
        if !gcd(&num, &denom)?.is_one() {
            return Ok(0);
        }

        // Strip twos from the reduced numerator; the second supplementary
        // law contributes a sign for each factor when denom is 3 or 5 mod 8.
        let reduced = remainder(&num, &denom, Rounding::Floor)?;
        let (exp, stripped) = padic(&reduced, &two)?;
        let denom_mod_8 = &denom % &eight;
        if exp % 2 == 1 && (denom_mod_8 == three || denom_mod_8 == five) {
            sign = -sign;
        }

        if stripped.is_one() {
            return Ok(sign);
        }

        // Quadratic reciprocity: a sign flip when both sides are 3 mod 4.
        if &denom % &four == three && &stripped % &four == three {
            sign = -sign;
        }

        num = std::mem::replace(&mut denom, stripped);
    }
}
