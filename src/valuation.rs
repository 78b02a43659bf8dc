//! p-adic valuations.
//!
//! [`padic`] splits an integer into a power of the base times a residual
//! that the base no longer divides: `num == base^exp * rest` with
//! `rest % base != 0`.  The base is any integer at least 2, not
//! necessarily prime.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{ArithmeticError, Result};

/// Computes the `base`-adic valuation of `num`.
///
/// Returns `(exp, rest)` with `num == base^exp * rest` and
/// `rest % base != 0`.  Division is exact at every step, so no rounding
/// convention is involved.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidBase`] when `base < 2` and
/// [`ArithmeticError::UndefinedValuation`] when `num` is zero (zero is
/// divisible by every base indefinitely, so the loop below would not
/// terminate on it).
pub fn padic(num: &BigInt, base: &BigInt) -> Result<(u64, BigInt)> {
    if base < &BigInt::from(2) {
        return Err(ArithmeticError::InvalidBase { base: base.clone() });
    }
    if num.is_zero() {
        return Err(ArithmeticError::UndefinedValuation);
    }

    let mut exp = 0u64;
    let mut rest = num.clone();
    while (&rest % base).is_zero() {
        exp += 1;
        rest /= base;
    }
    Ok((exp, rest))
}

#[cfg(test)]
mod tests {
    use super::padic;
    use crate::error::ArithmeticError;
    use num_bigint::BigInt;
    use num_traits::Zero;
    use proptest::prelude::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(matches!(
            padic(&big(8), &big(1)),
            Err(ArithmeticError::InvalidBase { .. })
        ));
        assert!(padic(&big(8), &big(-2)).is_err());
    }

    #[test]
    fn test_zero_rejected() {
        assert!(matches!(
            padic(&big(0), &big(2)),
            Err(ArithmeticError::UndefinedValuation)
        ));
    }

    #[test]
    fn test_known_valuations() {
        assert_eq!(padic(&big(40), &big(2)).unwrap(), (3, big(5)));
        assert_eq!(padic(&big(-40), &big(2)).unwrap(), (3, big(-5)));
        assert_eq!(padic(&big(45), &big(3)).unwrap(), (2, big(5)));
        assert_eq!(padic(&big(7), &big(2)).unwrap(), (0, big(7)));
        assert_eq!(padic(&big(100), &big(10)).unwrap(), (2, big(1)));
    }

    proptest! {
        #[test]
        fn prop_reconstruction(num in any::<i64>(), base in 2i64..1_000_000) {
            prop_assume!(num != 0);
            let (num, base) = (BigInt::from(num), BigInt::from(base));
            let (exp, rest) = padic(&num, &base).unwrap();
            prop_assert_eq!(base.pow(exp as u32) * &rest, num);
            prop_assert!(!(rest % base).is_zero());
        }
    }
}
