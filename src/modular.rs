//! Modular exponentiation and inversion.
//!
//! Inversion rides on the Bezout certificate from
//! [`bezout`](crate::bezout): when `gcd(num, mod) == 1` the certificate
//! coefficient of `num` is its inverse modulo `mod`.  Exponentiation is
//! square-and-multiply over the bits of the exponent, with every product
//! reduced modulo `mod` so operands never grow past `mod^2`.  Negative
//! exponents are routed through the inverse first.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::division::{remainder, Rounding};
use crate::error::{ArithmeticError, Result};
use crate::euclid::{bezout, gcd};

fn check_modulus(modulus: &BigInt) -> Result<()> {
    if modulus < &BigInt::from(2) {
        return Err(ArithmeticError::InvalidModulus {
            modulus: modulus.clone(),
        });
    }
    Ok(())
}

/// Computes the inverse of `num` modulo `modulus`.
///
/// The result `inv` lies in `(0, modulus)` and satisfies
/// `(num * inv) mod modulus == 1`.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidModulus`] when `modulus < 2` and
/// [`ArithmeticError::NotInvertible`] when `gcd(num, modulus) != 1`.
pub fn mod_inverse(num: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    check_modulus(modulus)?;
    if !gcd(num, modulus)?.is_one() {
        return Err(ArithmeticError::NotInvertible {
            num: num.clone(),
            modulus: modulus.clone(),
        });
    }
    let cert = bezout(num, modulus)?;
    remainder(&cert.x, modulus, Rounding::Floor)
}

/// Computes `num^exp` modulo `modulus`.
///
/// A negative exponent is evaluated as `mod_power(mod_inverse(num), -exp)`
/// and therefore requires `num` to be a unit.  The recursion
/// `num^exp = (num^2)^(exp/2)` (times `num` for odd `exp`) is unrolled
/// into a loop over the exponent bits, so the work is `O(log exp)`
/// multiplications.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidModulus`] when `modulus < 2`, and
/// propagates [`ArithmeticError::NotInvertible`] for a negative exponent
/// on a non-unit.
pub fn mod_power(num: &BigInt, exp: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    check_modulus(modulus)?;

    if exp.is_negative() {
        let inverse = mod_inverse(num, modulus)?;
        return mod_power(&inverse, &-exp, modulus);
    }

    let mut base = remainder(num, modulus, Rounding::Floor)?;
    let mut result = BigInt::one();
    let mut bits = exp.magnitude().clone();
    while !bits.is_zero() {
        if bits.is_odd() {
            result = result * &base % modulus;
        }
        base = &base * &base % modulus;
        bits >>= 1;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{mod_inverse, mod_power};
    use crate::error::ArithmeticError;
    use num_bigint::{BigInt, RandBigInt};
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_small_modulus_rejected() {
        assert!(matches!(
            mod_inverse(&big(3), &big(1)),
            Err(ArithmeticError::InvalidModulus { .. })
        ));
        assert!(matches!(
            mod_power(&big(3), &big(4), &big(0)),
            Err(ArithmeticError::InvalidModulus { .. })
        ));
    }

    #[test]
    fn test_non_unit_rejected() {
        assert!(matches!(
            mod_inverse(&big(6), &big(15)),
            Err(ArithmeticError::NotInvertible { .. })
        ));
        // A negative exponent needs the inverse, so the same failure
        // surfaces through mod_power.
        assert!(mod_power(&big(6), &big(-2), &big(15)).is_err());
    }

    #[test]
    fn test_inverse_known_values() {
        assert_eq!(mod_inverse(&big(3), &big(7)).unwrap(), big(5));
        assert_eq!(mod_inverse(&big(-3), &big(7)).unwrap(), big(2));
        assert_eq!(mod_inverse(&big(1), &big(2)).unwrap(), big(1));
    }

    #[test]
    fn test_power_known_values() {
        assert_eq!(mod_power(&big(0), &big(0), &big(7)).unwrap(), big(1));
        assert_eq!(mod_power(&big(5), &big(1), &big(7)).unwrap(), big(5));
        assert_eq!(mod_power(&big(-5), &big(1), &big(7)).unwrap(), big(2));
        assert_eq!(mod_power(&big(2), &big(10), &big(1000)).unwrap(), big(24));
        assert_eq!(mod_power(&big(3), &big(-1), &big(7)).unwrap(), big(5));
        assert_eq!(mod_power(&big(3), &big(-2), &big(7)).unwrap(), big(4));
    }

    #[test]
    fn test_fermat_on_multiword_operands() {
        // 2^61 - 1 is prime, so a^(p-1) == 1 mod p for units a.
        let p = (BigInt::one() << 61u32) - 1u32;
        let mut rng = rand::thread_rng();
        for _ in 0..8 {
            let a = rng.gen_bigint(256);
            if (&a % &p).is_zero() {
                continue;
            }
            assert!(mod_power(&a, &(&p - 1), &p).unwrap().is_one());
        }
    }

    proptest! {
        #[test]
        fn prop_inverse_round_trip(num in any::<i64>(), modulus in 2i64..100_000) {
            let (num, modulus) = (BigInt::from(num), BigInt::from(modulus));
            match mod_inverse(&num, &modulus) {
                Ok(inv) => {
                    prop_assert!(inv > BigInt::zero());
                    prop_assert!(inv < modulus);
                    let product = crate::division::remainder(
                        &(num * inv),
                        &modulus,
                        crate::division::Rounding::Floor,
                    )
                    .unwrap();
                    prop_assert!(product.is_one());
                }
                Err(ArithmeticError::NotInvertible { .. }) => {}
                Err(other) => return Err(TestCaseError::fail(other.to_string())),
            }
        }

        #[test]
        fn prop_power_matches_naive(num in -50i64..50, exp in 0u32..64, modulus in 2i64..1000) {
            let (num, modulus) = (BigInt::from(num), BigInt::from(modulus));
            let expected = crate::division::remainder(
                &num.pow(exp),
                &modulus,
                crate::division::Rounding::Floor,
            )
            .unwrap();
            let got = mod_power(&num, &BigInt::from(exp), &modulus).unwrap();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn prop_negative_exponent_inverts(num in 1i64..1000, exp in 1u32..32, modulus in 2i64..1000) {
            let (num, modulus) = (BigInt::from(num), BigInt::from(modulus));
            prop_assume!(crate::euclid::gcd(&num, &modulus).unwrap().is_one());
            let forward = mod_power(&num, &BigInt::from(exp), &modulus).unwrap();
            let backward = mod_power(&num, &-BigInt::from(exp), &modulus).unwrap();
            prop_assert_eq!(mod_inverse(&forward, &modulus).unwrap(), backward);
        }
    }
}
