#![deny(missing_docs)]

//! The design philosophy underlying `group_house` is pedagogical, yet mathematically rigorous.
//! Each module isolates one classical construction from elementary number theory,
//! showing how exact arbitrary-precision arithmetic composes into a complete
//! picture of the multiplicative group of residues.
//! # group_house
//!
//! **Group-House** is a Rust crate for foundational number theory over
//! arbitrary-precision integers: signed division with two rounding
//! conventions, the extended Euclidean algorithm, modular exponentiation
//! and inversion, p-adic valuations, the Jacobi symbol, and a stateful
//! [`ModularRing`] that lazily uncovers the structure of the
//! multiplicative group of integers modulo `n`.  All arithmetic runs on
//! [`num_bigint::BigInt`], so products and powers never overflow.
//!
//! ## Features
//!
//! * **Division with remainder** via [`divide`], in the floor convention
//!   (remainder in `[0, |d|)`) or the balanced convention (remainder in
//!   `(-|d|/2, |d|/2]`).
//! * **Euclidean suite**: [`gcd`], [`lcm`] and [`bezout`], the latter
//!   returning a [`Bezout`] certificate with `a*x + b*y == gcd`.
//! * **Modular arithmetic**: [`mod_power`] and [`mod_inverse`], with
//!   negative exponents routed through the inverse.
//! * **p-adic valuations and the Jacobi symbol** via [`padic`] and
//!   [`jacobi`].
//! * **Group structure**: [`ModularRing`] caches the factorization of
//!   its modulus, the Euler totient, the Carmichael exponent, the unit
//!   list, generators, the cyclic realization and its discrete-log
//!   table, and a growing table of element orders.  The
//!   [`group_theory`] module holds the factorization-level formulas it
//!   is built on.
//!
//! Every precondition violation surfaces as an [`ArithmeticError`];
//! nothing panics on bad input and nothing is silently truncated.
//!
//! ## Usage
//!
//! ```rust
//! use group_house::{jacobi, ModularRing};
//! use num_bigint::BigInt;
//!
//! let mut ring = ModularRing::new(BigInt::from(7)).unwrap();
//! assert_eq!(ring.euler().unwrap(), BigInt::from(6));
//! assert!(ring.is_cyclic().unwrap());
//! assert_eq!(ring.generator().unwrap(), Some(BigInt::from(3)));
//!
//! assert_eq!(jacobi(&BigInt::from(2), &BigInt::from(15)).unwrap(), 1);
//! ```
//!
//! The ring's accessors take `&mut self` because they populate an
//! internal cache; wrap an instance in a lock before sharing it across
//! threads.

mod division;
mod error;
mod euclid;
pub mod group_theory;
mod jacobi;
mod modular;
mod ring;
mod valuation;

pub use division::{divide, remainder, Rounding};
pub use error::{ArithmeticError, Result};
pub use euclid::{bezout, gcd, lcm, Bezout};
pub use group_theory::{
    carmichael_lambda, euler_phi, factor, mod_sqrt, prime_to, Factorization,
};
pub use jacobi::jacobi;
pub use modular::{mod_inverse, mod_power};
pub use ring::ModularRing;
pub use valuation::padic;
