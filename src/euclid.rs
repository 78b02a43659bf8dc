//! Greatest common divisors, least common multiples and Bezout certificates.
//!
//! The loops in this module run the classical Euclidean recurrences, but
//! with balanced remainders from [`divide`](crate::divide): recentering
//! the remainder around zero at every step at least halves its magnitude,
//! so the iteration count is logarithmic in the smaller operand and the
//! intermediate values stay small.  The recursive statements of the
//! algorithms live in the comments; the implementations are iterative so
//! the call stack stays flat for arbitrarily large inputs.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::division::{divide, remainder, Rounding};
use crate::error::{ArithmeticError, Result};

/// A certificate for Bezout's lemma: `a * x + b * y == gcd`.
///
/// The sign of the certificate is normalized so that `gcd` is positive
/// whenever at least one of the inputs is nonzero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bezout {
    /// Coefficient of the first operand.
    pub x: BigInt,
    /// Coefficient of the second operand.
    pub y: BigInt,
    /// The greatest common divisor witnessed by the coefficients.
    pub gcd: BigInt,
}

/// Computes the greatest common divisor of two integers.
///
/// Runs the Euclidean algorithm `gcd(a, b) = gcd(b, a mod b)` with
/// balanced remainders and returns the absolute value of the last nonzero
/// remainder-holder.
///
/// # Errors
///
/// Returns [`ArithmeticError::UndefinedGcd`] when both operands are zero.
pub fn gcd(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    if a.is_zero() && b.is_zero() {
        return Err(ArithmeticError::UndefinedGcd);
    }

    let mut lead = a.clone();
    let mut trail = b.clone();
    while !trail.is_zero() {
        let next = remainder(&lead, &trail, Rounding::Balanced)?;
        lead = std::mem::replace(&mut trail, next);
    }
    Ok(lead.abs())
}

/// Computes the least common multiple of two nonzero integers.
///
/// Evaluated as `(a / gcd(a, b)) * b`, dividing before multiplying so the
/// intermediate magnitude never exceeds the result.  The sign follows the
/// signs of the operands.
///
/// # Errors
///
/// Returns [`ArithmeticError::UndefinedLcm`] when either operand is zero.
pub fn lcm(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    if a.is_zero() || b.is_zero() {
        return Err(ArithmeticError::UndefinedLcm);
    }
    let divisor = gcd(a, b)?;
    Ok(a / divisor * b)
}

/// Solves Bezout's lemma for two integers not both zero.
///
/// Maintains the coefficient sequences of the extended Euclidean
/// algorithm (`newer = -quotient * older + oldest`) alongside the
/// balanced-remainder loop of [`gcd`], then flips the final signs if
/// needed so that `a * x + b * y` comes out positive.
///
/// # Errors
///
/// Returns [`ArithmeticError::UndefinedGcd`] when both operands are zero.
pub fn bezout(a: &BigInt, b: &BigInt) -> Result<Bezout> {
    if a.is_zero() && b.is_zero() {
        return Err(ArithmeticError::UndefinedGcd);
    }

    if b.is_zero() {
        return Ok(Bezout {
            x: a.signum(),
            y: BigInt::zero(),
            gcd: a.abs(),
        });
    }

    let mut lead = a.clone();
    let mut trail = b.clone();
    let (mut quotient, mut rem) = divide(&lead, &trail, Rounding::Balanced)?;
    let (mut xx, mut x) = (BigInt::zero(), BigInt::from(1));
    let (mut yy, mut y) = (BigInt::from(1), -&quotient);

    while !rem.is_zero() {
        lead = std::mem::replace(&mut trail, rem);
        (quotient, rem) = divide(&lead, &trail, Rounding::Balanced)?;
        let newer_x = -&quotient * &x + &xx;
        let newer_y = -&quotient * &y + &yy;
        xx = std::mem::replace(&mut x, newer_x);
        yy = std::mem::replace(&mut y, newer_y);
    }

    let witnessed = a * &xx + b * &yy;
    if witnessed.is_positive() {
        Ok(Bezout {
            x: xx,
            y: yy,
            gcd: witnessed,
        })
    } else {
        Ok(Bezout {
            gcd: -&witnessed,
            x: -xx,
            y: -yy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{bezout, gcd, lcm};
    use num_bigint::{BigInt, RandBigInt};
    use num_traits::{One, Signed, Zero};
    use proptest::prelude::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_gcd_of_zeros_rejected() {
        assert!(gcd(&big(0), &big(0)).is_err());
        assert!(bezout(&big(0), &big(0)).is_err());
    }

    #[test]
    fn test_gcd_known_values() {
        assert_eq!(gcd(&big(12), &big(18)).unwrap(), big(6));
        assert_eq!(gcd(&big(-12), &big(18)).unwrap(), big(6));
        assert_eq!(gcd(&big(12), &big(-18)).unwrap(), big(6));
        assert_eq!(gcd(&big(17), &big(5)).unwrap(), big(1));
        assert_eq!(gcd(&big(0), &big(-7)).unwrap(), big(7));
        assert_eq!(gcd(&big(7), &big(0)).unwrap(), big(7));
    }

    #[test]
    fn test_lcm_zero_rejected() {
        assert!(lcm(&big(0), &big(5)).is_err());
        assert!(lcm(&big(5), &big(0)).is_err());
    }

    #[test]
    fn test_lcm_known_values() {
        assert_eq!(lcm(&big(4), &big(6)).unwrap(), big(12));
        assert_eq!(lcm(&big(7), &big(5)).unwrap(), big(35));
    }

    #[test]
    fn test_bezout_base_cases() {
        let cert = bezout(&big(7), &big(0)).unwrap();
        assert_eq!((cert.x, cert.y, cert.gcd), (big(1), big(0), big(7)));
        let cert = bezout(&big(-7), &big(0)).unwrap();
        assert_eq!((cert.x, cert.y, cert.gcd), (big(-1), big(0), big(7)));
    }

    #[test]
    fn test_bezout_certificate() {
        for (a, b) in [(240, 46), (-240, 46), (240, -46), (-240, -46), (5, 7)] {
            let (a, b) = (big(a), big(b));
            let cert = bezout(&a, &b).unwrap();
            assert_eq!(&a * &cert.x + &b * &cert.y, cert.gcd);
            assert_eq!(cert.gcd, gcd(&a, &b).unwrap());
            assert!(cert.gcd.is_positive());
        }
    }

    #[test]
    fn test_multiword_operands() {
        // Operands far beyond machine-word range.
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let a = rng.gen_bigint(256);
            let b = rng.gen_bigint(256);
            if a.is_zero() && b.is_zero() {
                continue;
            }
            let d = gcd(&a, &b).unwrap();
            assert!((&a % &d).is_zero());
            assert!((&b % &d).is_zero());
            let cert = bezout(&a, &b).unwrap();
            assert_eq!(&a * cert.x + &b * cert.y, d);
        }
    }

    proptest! {
        #[test]
        fn prop_gcd_divides_and_reduces(a in any::<i128>(), b in any::<i128>()) {
            prop_assume!(a != 0 || b != 0);
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let d = gcd(&a, &b).unwrap();
            prop_assert!((&a % &d).is_zero());
            prop_assert!((&b % &d).is_zero());
            prop_assert!(gcd(&(&a / &d), &(&b / &d)).unwrap().is_one());
        }

        #[test]
        fn prop_lcm_common_multiple(a in any::<i64>(), b in any::<i64>()) {
            prop_assume!(a != 0 && b != 0);
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let m = lcm(&a, &b).unwrap();
            prop_assert!((&m % &a).is_zero());
            prop_assert!((&m % &b).is_zero());
            prop_assert!(gcd(&(&m / &a), &(&m / &b)).unwrap().is_one());
        }

        #[test]
        fn prop_bezout_identity(a in any::<i128>(), b in any::<i128>()) {
            prop_assume!(a != 0 || b != 0);
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let cert = bezout(&a, &b).unwrap();
            prop_assert_eq!(&a * &cert.x + &b * &cert.y, gcd(&a, &b).unwrap());
        }
    }
}
