//! Error kinds for precondition violations in the arithmetic core.
//!
//! Every failure in this crate is a local, fail-fast precondition
//! violation.  Nothing is retried and no partial results are returned;
//! callers decide whether to abort or to repair their inputs.  The
//! variants mirror the undefined corners of the underlying mathematics:
//! division by zero, `gcd(0, 0)`, inverting a non-unit, and so on.

use num_bigint::BigInt;
use thiserror::Error;

/// Precondition violations surfaced by the arithmetic core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division with a zero divisor.
    #[error("attempted division by zero")]
    DivisionByZero,

    /// `gcd(0, 0)` (and therefore `bezout(0, 0)`) is undefined.
    #[error("gcd(0, 0) is undefined")]
    UndefinedGcd,

    /// `lcm` with a zero operand is undefined.
    #[error("lcm with a zero operand is undefined")]
    UndefinedLcm,

    /// The element shares a factor with the modulus and has no inverse.
    #[error("{num} is not invertible modulo {modulus}")]
    NotInvertible {
        /// Element whose inverse was requested.
        num: BigInt,
        /// Modulus relative to which inversion was attempted.
        modulus: BigInt,
    },

    /// A modulus smaller than 2 was supplied where one at least 2 is required.
    #[error("modulus must be at least 2, got {modulus}")]
    InvalidModulus {
        /// The offending modulus.
        modulus: BigInt,
    },

    /// A p-adic base smaller than 2 was supplied.
    #[error("p-adic base must be at least 2, got {base}")]
    InvalidBase {
        /// The offending base.
        base: BigInt,
    },

    /// The Jacobi symbol is only defined for odd second arguments.
    #[error("Jacobi symbol with even denominator {denominator} is undefined")]
    UndefinedJacobiSymbol {
        /// The even denominator.
        denominator: BigInt,
    },

    /// Zero is divisible by every base, so its valuation is undefined.
    #[error("p-adic valuation of zero is undefined")]
    UndefinedValuation,

    /// Factorization is defined for positive integers only.
    #[error("factorization of {number} is undefined")]
    UndefinedFactorization {
        /// The offending number.
        number: BigInt,
    },

    /// The element is not a quadratic residue for the given modulus.
    #[error("{element} is not a square modulo {modulus}")]
    NotASquare {
        /// Element whose square root was requested.
        element: BigInt,
        /// Prime modulus relative to which the root was sought.
        modulus: BigInt,
    },
}

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, ArithmeticError>;
