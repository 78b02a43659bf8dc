//! The design philosophy underlying `group_house` is pedagogical, yet mathematically rigorous.
//! Each module isolates one classical construction from elementary number theory,
//! showing how exact arbitrary-precision arithmetic composes into a complete
//! picture of the multiplicative group of residues.
//! Arithmetic in the ring of integers modulo a fixed modulus.
//!
//! [`ModularRing`] owns a modulus and lazily uncovers the structure of
//! its multiplicative group: the factorization of the modulus, the Euler
//! totient and Carmichael exponent, the ascending list of units, a
//! generator when the group is cyclic, the realization of the group as
//! powers of that generator, the inverse discrete-log table, and a
//! growing table of element orders.  Every cell is computed on first
//! demand and cached for the lifetime of the instance; nothing is ever
//! recomputed or invalidated.
//!
//! The cells depend on one another in a strict order:
//!
//! ```text
//! factorization -> euler / carmichael -> carmichael_factorization
//!   -> carmichael_primes -> order_of -> generator
//!   -> cyclic realization -> discrete_log
//! ```
//!
//! No accessor reaches downstream of itself while filling its own cell;
//! in particular [`ModularRing::order_of`] consults the discrete-log
//! table only once a generator is already realized.  Accessors take
//! `&mut self` because they populate the cache: sharing one ring between
//! threads requires an external lock or a single-writer discipline.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{ArithmeticError, Result};
use crate::euclid::gcd;
use crate::group_theory::{
    carmichael_lambda, euler_phi, factor, mod_sqrt, prime_to, Factorization,
};
use crate::modular::{mod_inverse, mod_power};

/// The ring of integers modulo a fixed modulus, with cached group structure.
///
/// Construction fixes the modulus forever; all other state is a private
/// cache that only grows.  The order table starts out knowing that 1 has
/// order 1 and, for any modulus other than 2, that `modulus - 1` has
/// order 2.
#[derive(Debug, Clone)]
pub struct ModularRing {
    modulus: BigInt,
    orders: BTreeMap<BigInt, BigInt>,
    factorization: Option<Factorization>,
    euler: Option<BigInt>,
    carmichael: Option<BigInt>,
    carmichael_factorization: Option<Factorization>,
    multiplicative_group: Option<Vec<BigInt>>,
    generator: Option<BigInt>,
    as_cyclic_group: Option<Vec<BigInt>>,
    discrete_log: Option<BTreeMap<BigInt, usize>>,
}

impl ModularRing {
    /// Creates the ring of integers modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidModulus`] when `modulus < 2`.
    pub fn new(modulus: BigInt) -> Result<Self> {
        if modulus < BigInt::from(2) {
            return Err(ArithmeticError::InvalidModulus { modulus });
        }

        let mut orders = BTreeMap::new();
        orders.insert(BigInt::one(), BigInt::one());
        if modulus != BigInt::from(2) {
            // -1 squares to 1, and is distinct from 1 for any larger modulus.
            orders.insert(&modulus - 1, BigInt::from(2));
        }

        Ok(ModularRing {
            modulus,
            orders,
            factorization: None,
            euler: None,
            carmichael: None,
            carmichael_factorization: None,
            multiplicative_group: None,
            generator: None,
            as_cyclic_group: None,
            discrete_log: None,
        })
    }

    /// The modulus this ring was constructed with.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Factorization of the modulus.
    pub fn factorization(&mut self) -> Result<Factorization> {
        if self.factorization.is_none() {
            self.factorization = Some(factor(&self.modulus)?);
        }
        Ok(self.factorization.clone().unwrap_or_default())
    }

    /// Size of the multiplicative group (Euler's totient of the modulus).
    pub fn euler(&mut self) -> Result<BigInt> {
        if self.euler.is_none() {
            let factorization = self.factorization()?;
            self.euler = Some(euler_phi(&factorization));
        }
        Ok(self.euler.clone().unwrap_or_default())
    }

    /// Maximum order of any element of the multiplicative group.
    pub fn carmichael(&mut self) -> Result<BigInt> {
        if self.carmichael.is_none() {
            let factorization = self.factorization()?;
            self.carmichael = Some(carmichael_lambda(&factorization));
        }
        Ok(self.carmichael.clone().unwrap_or_default())
    }

    /// Factorization of the Carmichael exponent, used by the order search.
    pub fn carmichael_factorization(&mut self) -> Result<Factorization> {
        if self.carmichael_factorization.is_none() {
            let carmichael = self.carmichael()?;
            self.carmichael_factorization = Some(factor(&carmichael)?);
        }
        Ok(self.carmichael_factorization.clone().unwrap_or_default())
    }

    /// Prime factors of the Carmichael exponent, each repeated by its
    /// multiplicity.
    ///
    /// This flat multiset view is what lets [`ModularRing::order_of`]
    /// climb the divisor lattice one prime at a time.
    pub fn carmichael_primes(&mut self) -> Result<Vec<BigInt>> {
        let factorization = self.carmichael_factorization()?;
        let mut primes = Vec::new();
        for (prime, exp) in factorization {
            for _ in 0..exp {
                primes.push(prime.clone());
            }
        }
        Ok(primes)
    }

    /// Whether the multiplicative group is cyclic.
    ///
    /// The group is cyclic exactly when some element realizes the
    /// maximum order, i.e. when the totient equals the Carmichael
    /// exponent.
    pub fn is_cyclic(&mut self) -> Result<bool> {
        Ok(self.euler()? == self.carmichael()?)
    }

    /// The multiplicative group: ascending residues coprime to the modulus.
    pub fn multiplicative_group(&mut self) -> Result<Vec<BigInt>> {
        if self.multiplicative_group.is_none() {
            let factorization = self.factorization()?;
            self.multiplicative_group = Some(prime_to(&factorization));
        }
        Ok(self.multiplicative_group.clone().unwrap_or_default())
    }

    /// A generator of the multiplicative group, when the group is cyclic.
    ///
    /// Scans the units in ascending order and keeps the first one whose
    /// order is the full group size, so the result is the smallest
    /// primitive root.  Returns `None` for a non-cyclic group.
    pub fn generator(&mut self) -> Result<Option<BigInt>> {
        if self.generator.is_none() && self.is_cyclic()? {
            let target = self.euler()?;
            for unit in self.multiplicative_group()? {
                if self.order_of(&unit)? == target {
                    self.generator = Some(unit);
                    break;
                }
            }
        }
        Ok(self.generator.clone())
    }

    /// The group realized as powers of a generator, when cyclic.
    ///
    /// Index `p` of the returned vector holds `g^p`; the length is the
    /// group order.
    pub fn as_cyclic_group(&mut self) -> Result<Option<Vec<BigInt>>> {
        if self.as_cyclic_group.is_none() && self.is_cyclic()? {
            if let Some(generator) = self.generator()? {
                let realization = self.cyclic_subgroup_from(&generator)?;
                if self.multiplicative_group.is_none() {
                    let mut units = realization.clone();
                    units.sort();
                    self.multiplicative_group = Some(units);
                }
                self.as_cyclic_group = Some(realization);
            }
        }
        Ok(self.as_cyclic_group.clone())
    }

    /// Discrete-log table for the realized generator, when cyclic.
    ///
    /// The inverse of [`ModularRing::as_cyclic_group`]: maps each unit
    /// back to its power index.
    pub fn discrete_log(&mut self) -> Result<Option<BTreeMap<BigInt, usize>>> {
        if self.discrete_log.is_none() && self.is_cyclic()? {
            if let Some(realization) = self.as_cyclic_group()? {
                let table = realization
                    .into_iter()
                    .enumerate()
                    .map(|(index, unit)| (unit, index))
                    .collect();
                self.discrete_log = Some(table);
            }
        }
        Ok(self.discrete_log.clone())
    }

    /// Order of a unit: the least positive exponent sending it to 1.
    ///
    /// Already-known orders come from the insert-only order table.  Once
    /// a generator has been realized, the order falls out of the
    /// isomorphism with the additive group modulo the totient:
    /// `euler / gcd(discrete_log(element), euler)`.  Before that, the
    /// search walks the divisor lattice of the Carmichael exponent
    /// breadth-first, extending every known power of the element by one
    /// prime factor at a time; the first power that hits 1 carries the
    /// minimal exponent, which is the order.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NotInvertible`] when the element is
    /// not a unit (non-units never return to 1).
    pub fn order_of(&mut self, element: &BigInt) -> Result<BigInt> {
        let elem = self.elem(element);
        if let Some(order) = self.orders.get(&elem) {
            return Ok(order.clone());
        }
        if !gcd(&elem, &self.modulus)?.is_one() {
            return Err(ArithmeticError::NotInvertible {
                num: elem,
                modulus: self.modulus.clone(),
            });
        }

        if self.generator.is_some() {
            let euler = self.euler()?;
            let index = self
                .discrete_log()?
                .and_then(|table| table.get(&elem).copied())
                .map(BigInt::from)
                .unwrap_or_default();
            let order = &euler / gcd(&index, &euler)?;
            self.orders.entry(elem).or_insert_with(|| order.clone());
            return Ok(order);
        }

        let mut powers = BTreeMap::new();
        powers.insert(BigInt::one(), elem.clone());
        for prime in self.carmichael_primes()? {
            let mut extended = BTreeMap::new();
            for (exponent, power) in &powers {
                let reach = &prime * exponent;
                if !powers.contains_key(&reach) {
                    extended.insert(reach, self.power_of(power, &prime)?);
                }
            }
            // Ascending iteration makes the first hit the minimal exponent.
            if let Some((order, _)) = extended.iter().find(|(_, power)| power.is_one()) {
                let order = order.clone();
                self.orders.entry(elem).or_insert_with(|| order.clone());
                return Ok(order);
            }
            powers.extend(extended);
        }

        // A unit's order divides the Carmichael exponent, and the full
        // exponent itself is reached on the last round.
        unreachable!("divisor-lattice search exhausted for a unit")
    }

    /// Orders of every element of the multiplicative group.
    ///
    /// Forces [`ModularRing::order_of`] across the whole group.  For a
    /// cyclic group the generator is discovered first, so the bulk of
    /// the work goes through the cheap discrete-log path.
    pub fn all_orders(&mut self) -> Result<BTreeMap<BigInt, BigInt>> {
        if BigInt::from(self.orders.len()) != self.euler()? {
            if self.is_cyclic()? {
                self.generator()?;
            }
            for unit in self.multiplicative_group()? {
                self.order_of(&unit)?;
            }
        }
        Ok(self.orders.clone())
    }

    /// All generators of the multiplicative group, ascending.
    ///
    /// Empty when the group is not cyclic; otherwise exactly
    /// `phi(phi(n))` elements.
    pub fn all_generators(&mut self) -> Result<Vec<BigInt>> {
        let euler = self.euler()?;
        Ok(self
            .all_orders()?
            .into_iter()
            .filter(|(_, order)| *order == euler)
            .map(|(unit, _)| unit)
            .collect())
    }

    /// Casts a number to its residue in `[0, modulus)`.
    pub fn elem(&self, number: &BigInt) -> BigInt {
        number.mod_floor(&self.modulus)
    }

    /// Sum of the given elements in the ring.
    pub fn add(&self, elements: &[BigInt]) -> BigInt {
        elements
            .iter()
            .fold(BigInt::zero(), |acc, x| (acc + x).mod_floor(&self.modulus))
    }

    /// Product of the given elements in the ring.
    pub fn mult(&self, elements: &[BigInt]) -> BigInt {
        elements
            .iter()
            .fold(BigInt::one(), |acc, x| (acc * x).mod_floor(&self.modulus))
    }

    /// Power of an element in the ring.
    ///
    /// # Errors
    ///
    /// Propagates [`ArithmeticError::NotInvertible`] for a negative
    /// exponent on a non-unit.
    pub fn power_of(&self, element: &BigInt, exponent: &BigInt) -> Result<BigInt> {
        mod_power(element, exponent, &self.modulus)
    }

    /// Inverse of a unit in the ring.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NotInvertible`] when the element
    /// shares a factor with the modulus.
    pub fn inverse_of(&self, element: &BigInt) -> Result<BigInt> {
        mod_inverse(element, &self.modulus)
    }

    /// Square roots of an element, for a prime modulus.
    ///
    /// Delegates to [`mod_sqrt`]; the result is only meaningful when the
    /// modulus is prime.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NotASquare`] for a quadratic
    /// non-residue.
    pub fn sqrt_of(&self, element: &BigInt) -> Result<Vec<BigInt>> {
        mod_sqrt(element, &self.modulus)
    }

    /// The cyclic subgroup generated by a unit: `[1, x, x^2, ...]` up to
    /// the power before the sequence returns to 1.
    ///
    /// As a side effect, the element's order (the length of the returned
    /// vector) is recorded in the order table if it was not yet known.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NotInvertible`] when the element is
    /// not a unit (the powers of a non-unit never return to 1).
    pub fn cyclic_subgroup_from(&mut self, element: &BigInt) -> Result<Vec<BigInt>> {
        let elem = self.elem(element);
        if !gcd(&elem, &self.modulus)?.is_one() {
            return Err(ArithmeticError::NotInvertible {
                num: elem,
                modulus: self.modulus.clone(),
            });
        }

        let mut subgroup = vec![BigInt::one()];
        let mut current = elem.clone();
        while !current.is_one() {
            subgroup.push(current.clone());
            current = (current * &elem).mod_floor(&self.modulus);
        }

        let order = BigInt::from(subgroup.len());
        self.orders.entry(elem).or_insert(order);
        Ok(subgroup)
    }
}
