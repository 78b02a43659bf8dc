//! The design philosophy underlying `group_house` is pedagogical, yet mathematically rigorous.
//! Each module isolates one classical construction from elementary number theory,
//! showing how exact arbitrary-precision arithmetic composes into a complete
//! picture of the multiplicative group of residues.
//! Factorizations and the group-theoretic formulas derived from them.
//!
//! [`ModularRing`](crate::ModularRing) consumes everything in this module
//! through a narrow contract: a factorization of the modulus, the Euler
//! totient and Carmichael exponent derived from it, the ascending list of
//! units, and prime-modulus square roots.  The implementations here are
//! deliberately elementary (trial division, direct formula evaluation,
//! Tonelli-Shanks); they are not a general-purpose factoring stack.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::division::{remainder, Rounding};
use crate::error::{ArithmeticError, Result};
use crate::euclid::lcm;
use crate::jacobi::jacobi;
use crate::modular::mod_power;
use crate::valuation::padic;

/// A factorization: ascending primes mapped to positive exponents.
///
/// The product of `p^e` over the entries reconstructs the factored
/// number.  Exponents are `u32`: an exponent never exceeds the bit
/// length of the number it came from.
pub type Factorization = BTreeMap<BigInt, u32>;

/// Factors a positive integer by trial division.
///
/// `factor(1)` returns the empty factorization.  Each candidate divisor
/// is stripped with [`padic`], so the remaining cofactor shrinks by the
/// full prime power at once; candidates above the square root of the
/// cofactor cannot divide it, leaving the cofactor itself as the final
/// prime.
///
/// # Errors
///
/// Returns [`ArithmeticError::UndefinedFactorization`] when `n < 1`.
pub fn factor(n: &BigInt) -> Result<Factorization> {
    if !n.is_positive() {
        return Err(ArithmeticError::UndefinedFactorization { number: n.clone() });
    }

    let mut factors = Factorization::new();
    let mut remaining = n.clone();

    let two = BigInt::from(2);
    if remaining >= two {
        let (exp, rest) = padic(&remaining, &two)?;
        if exp > 0 {
            factors.insert(two, exp as u32);
            remaining = rest;
        }
    }

    let mut candidate = BigInt::from(3);
    while &candidate * &candidate <= remaining {
        let (exp, rest) = padic(&remaining, &candidate)?;
        if exp > 0 {
            factors.insert(candidate.clone(), exp as u32);
            remaining = rest;
        }
        candidate += 2;
    }

    if remaining > BigInt::one() {
        factors.insert(remaining, 1);
    }
    Ok(factors)
}

/// Rebuilds the factored number from a factorization.
pub fn reconstruct(factorization: &Factorization) -> BigInt {
    factorization
        .iter()
        .fold(BigInt::one(), |acc, (prime, exp)| acc * prime.pow(*exp))
}

/// Euler's totient from a factorization: `n * prod(1 - 1/p)`.
///
/// Evaluated as `prod(p^(e-1) * (p - 1))` over the entries, which keeps
/// every intermediate an integer.
pub fn euler_phi(factorization: &Factorization) -> BigInt {
    factorization.iter().fold(BigInt::one(), |acc, (prime, exp)| {
        acc * prime.pow(exp - 1) * (prime - 1)
    })
}

/// The Carmichael function from a factorization.
///
/// The maximum order of a unit: the lcm over prime powers of
/// `lambda(p^e)`, where `lambda(2) = 1`, `lambda(4) = 2`,
/// `lambda(2^e) = 2^(e-2)` for `e >= 3`, and `lambda(p^e) = phi(p^e)`
/// for odd `p`.
pub fn carmichael_lambda(factorization: &Factorization) -> BigInt {
    let two = BigInt::from(2);
    factorization.iter().fold(BigInt::one(), |acc, (prime, exp)| {
        let local = if *prime == two {
            match exp {
                1 => BigInt::one(),
                2 => BigInt::from(2),
                _ => BigInt::from(2).pow(exp - 2),
            }
        } else {
            prime.pow(exp - 1) * (prime - 1)
        };
        // Operands are positive, so lcm cannot fail.
        lcm(&acc, &local).unwrap_or(acc)
    })
}

/// Ascending residues in `[1, n)` coprime to `n`, for the `n` the
/// factorization came from.
///
/// A residue is kept when no prime of the factorization divides it, so
/// the output is exactly the multiplicative group modulo `n` and its
/// length is [`euler_phi`] of the factorization.
pub fn prime_to(factorization: &Factorization) -> Vec<BigInt> {
    let n = reconstruct(factorization);
    let mut units = Vec::new();
    let mut candidate = BigInt::one();
    while candidate < n {
        if factorization
            .keys()
            .all(|prime| !(&candidate % prime).is_zero())
        {
            units.push(candidate.clone());
        }
        candidate += 1;
    }
    units
}

/// Square roots of `element` modulo an odd prime (or 2).
///
/// Returns the roots in ascending order: two of them for a nonzero
/// quadratic residue, one for zero, one modulo 2.  Uses the
/// Tonelli-Shanks procedure, with the `p = 3 (mod 4)` exponent shortcut
/// when the two-part of `p - 1` is trivial.  The modulus must be prime;
/// composite moduli make the Legendre test below meaningless.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidModulus`] when `prime < 2` and
/// [`ArithmeticError::NotASquare`] when `element` is a non-residue.
pub fn mod_sqrt(element: &BigInt, prime: &BigInt) -> Result<Vec<BigInt>> {
    if prime < &BigInt::from(2) {
        return Err(ArithmeticError::InvalidModulus {
            modulus: prime.clone(),
        });
    }

    let reduced = remainder(element, prime, Rounding::Floor)?;
    if reduced.is_zero() {
        return Ok(vec![BigInt::zero()]);
    }
    if *prime == BigInt::from(2) {
        return Ok(vec![reduced]);
    }

    if jacobi(&reduced, prime)? != 1 {
        return Err(ArithmeticError::NotASquare {
            element: element.clone(),
            modulus: prime.clone(),
        });
    }

    // p - 1 = 2^s * q with q odd.
    let two = BigInt::from(2);
    let (s, q) = padic(&(prime - 1), &two)?;

    let root = if s == 1 {
        // p = 3 (mod 4): a^((p+1)/4) is a root.
        mod_power(&reduced, &((prime + 1) / 4), prime)?
    } else {
        // Find a quadratic non-residue to seed the correction chain.
        let mut witness = two.clone();
        while jacobi(&witness, prime)? != -1 {
            witness += 1;
        }

        let mut m = s;
        let mut c = mod_power(&witness, &q, prime)?;
        let mut t = mod_power(&reduced, &q, prime)?;
        let mut r = mod_power(&reduced, &((&q + 1) / 2), prime)?;
        while !t.is_one() {
            // Least i with t^(2^i) == 1; always < m for a residue.
            let mut i = 0u64;
            let mut probe = t.clone();
            while !probe.is_one() {
                probe = &probe * &probe % prime;
                i += 1;
            }

            let hop = mod_power(&c, &(BigInt::one() << (m - i - 1)), prime)?;
            m = i;
            c = &hop * &hop % prime;
            t = t * &c % prime;
            r = r * hop % prime;
        }
        r
    };

    let mirror = prime - &root;
    let mut roots = vec![root, mirror];
    roots.sort();
    roots.dedup();
    Ok(roots)
}
