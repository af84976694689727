//! Finite fields as explicit operation tables.
//!
//! This module provides:
//! - `FiniteField`, a field whose four operations are total lookup tables over
//!   an enumerated element set
//! - `FiniteField::modulo` and `FiniteField::modulo_poly`, which build those
//!   tables by reducing a base field modulo a prime or an irreducible
//!   polynomial
//! - `FieldLaw` and `CheckReport` for verifying the field axioms exhaustively

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::algebra::euclid::extended_euclid;
use crate::algebra::field::Field;
use crate::error::AlgebraError;
use crate::structures::poly::{Poly, PolynomialField};

// ============================================================================
// Operation tables
// ============================================================================

/// Value-keyed operation tables, the raw material of a [`FiniteField`].
///
/// `inv` needs no entry for zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationTables<E: Eq + Hash> {
    pub add: HashMap<(E, E), E>,
    pub neg: HashMap<E, E>,
    pub mul: HashMap<(E, E), E>,
    pub inv: HashMap<E, E>,
}

impl<E: Eq + Hash> OperationTables<E> {
    /// Empty tables sized for `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            add: HashMap::with_capacity(n * n),
            neg: HashMap::with_capacity(n),
            mul: HashMap::with_capacity(n * n),
            inv: HashMap::with_capacity(n),
        }
    }
}

impl<E: Eq + Hash> Default for OperationTables<E> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

// ============================================================================
// Field laws
// ============================================================================

/// The nine axioms a finite field has to satisfy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldLaw {
    AddAssociative,
    AddCommutative,
    AddIdentity,
    AddInverse,
    MulAssociative,
    MulCommutative,
    MulIdentity,
    MulInverse,
    Distributive,
}

impl FieldLaw {
    pub const ALL: [FieldLaw; 9] = [
        FieldLaw::AddAssociative,
        FieldLaw::AddCommutative,
        FieldLaw::AddIdentity,
        FieldLaw::AddInverse,
        FieldLaw::MulAssociative,
        FieldLaw::MulCommutative,
        FieldLaw::MulIdentity,
        FieldLaw::MulInverse,
        FieldLaw::Distributive,
    ];

    /// Human readable statement of the law.
    pub fn description(self) -> &'static str {
        match self {
            FieldLaw::AddAssociative => "associativity of addition",
            FieldLaw::AddCommutative => "commutativity of addition",
            FieldLaw::AddIdentity => "zero is neutral element for addition",
            FieldLaw::AddInverse => "every element has a negation",
            FieldLaw::MulAssociative => "associativity of multiplication",
            FieldLaw::MulCommutative => "commutativity of multiplication",
            FieldLaw::MulIdentity => "one is neutral element for multiplication",
            FieldLaw::MulInverse => "every nonzero element has an inverse",
            FieldLaw::Distributive => "multiplication distributes over addition",
        }
    }
}

impl fmt::Display for FieldLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of [`FiniteField::check_report`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckReport {
    failed: Vec<FieldLaw>,
}

impl CheckReport {
    /// True when every law holds.
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }

    /// Laws that do not hold, in [`FieldLaw::ALL`] order.
    pub fn failed(&self) -> &[FieldLaw] {
        &self.failed
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "all field laws hold");
        }
        let names: Vec<&str> = self.failed.iter().map(|law| law.description()).collect();
        write!(f, "failed: {}", names.join(", "))
    }
}

// ============================================================================
// FiniteField
// ============================================================================

/// A finite field with explicitly tabulated operations.
///
/// Elements are assigned stable indices at construction: `zero` is index 0,
/// `one` index 1, the rest follow in the order they were supplied. The
/// tables are dense `n × n` arrays over those indices and never change after
/// construction.
///
/// Passing a value that is not an element of the field to any [`Field`]
/// operation is a programming error and panics.
///
/// # Example
///
/// ```
/// use galoiskit::{Field, FiniteField, Integers};
///
/// let gf7 = FiniteField::modulo(&7, &Integers).unwrap();
/// assert_eq!(gf7.len(), 7);
/// assert_eq!(gf7.mul(&3, &5), 1);
/// assert_eq!(gf7.inv(&3), Ok(5));
/// assert!(gf7.check());
/// ```
#[derive(Clone, Debug)]
pub struct FiniteField<E> {
    elements: Vec<E>,
    index: HashMap<E, usize>,
    add: Vec<usize>,
    mul: Vec<usize>,
    neg: Vec<usize>,
    inv: Vec<Option<usize>>,
}

const ZERO: usize = 0;
const ONE: usize = 1;

impl<E: Clone + Eq + Hash + fmt::Debug> FiniteField<E> {
    /// Create a finite field from its elements and operation tables.
    ///
    /// Duplicate elements are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::Precondition`] if `zero == one`, if either is
    /// missing from `elements`, or if a table lacks an entry (`add`/`mul` for
    /// any pair, `neg` for any element, `inv` for any nonzero element) or maps
    /// to a value outside `elements`.
    pub fn new(
        elements: impl IntoIterator<Item = E>,
        zero: E,
        one: E,
        tables: OperationTables<E>,
    ) -> Result<Self, AlgebraError> {
        if zero == one {
            return Err(AlgebraError::Precondition(format!(
                "zero and one must differ, both are {zero:?}"
            )));
        }

        let mut ordered = vec![zero.clone(), one.clone()];
        let mut index = HashMap::from([(zero.clone(), ZERO), (one.clone(), ONE)]);
        let (mut has_zero, mut has_one) = (false, false);
        for e in elements {
            if e == zero {
                has_zero = true;
            } else if e == one {
                has_one = true;
            } else if !index.contains_key(&e) {
                index.insert(e.clone(), ordered.len());
                ordered.push(e);
            }
        }
        if !has_zero {
            return Err(AlgebraError::Precondition(format!(
                "zero {zero:?} is not an element"
            )));
        }
        if !has_one {
            return Err(AlgebraError::Precondition(format!(
                "one {one:?} is not an element"
            )));
        }

        let resolve = |table: &str,
                       args: &dyn fmt::Debug,
                       value: Option<&E>|
         -> Result<usize, AlgebraError> {
            let value = value.ok_or_else(|| {
                AlgebraError::Precondition(format!("{table} table has no entry for {args:?}"))
            })?;
            index.get(value).copied().ok_or_else(|| {
                AlgebraError::Precondition(format!(
                    "{table} table maps {args:?} to {value:?}, which is not an element"
                ))
            })
        };

        let n = ordered.len();
        let mut add = Vec::with_capacity(n * n);
        let mut mul = Vec::with_capacity(n * n);
        for a in &ordered {
            for b in &ordered {
                let pair = (a.clone(), b.clone());
                add.push(resolve("add", &pair, tables.add.get(&pair))?);
                mul.push(resolve("mul", &pair, tables.mul.get(&pair))?);
            }
        }

        let mut neg = Vec::with_capacity(n);
        let mut inv = Vec::with_capacity(n);
        for (i, a) in ordered.iter().enumerate() {
            neg.push(resolve("neg", a, tables.neg.get(a))?);
            inv.push(if i == ZERO {
                None
            } else {
                Some(resolve("inv", a, tables.inv.get(a))?)
            });
        }

        Ok(Self {
            elements: ordered,
            index,
            add,
            mul,
            neg,
            inv,
        })
    }

    /// Build `F / (p)`: the residues of `field` modulo `p` with reduced
    /// arithmetic.
    ///
    /// Inverses come from the extended Euclidean algorithm on `(a, p)`; a
    /// non-unit gcd for any residue `a` proves `p` is not prime (or, for
    /// polynomials, not irreducible).
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::Precondition`] if `p` is not an element of `field`
    ///   or the residues do not contain both `zero` and `one`
    /// - [`AlgebraError::NonPrimeModulus`] if some gcd is not a unit
    /// - [`AlgebraError::Unsupported`] if `field` cannot enumerate residues
    ///
    /// # Example
    ///
    /// ```
    /// use galoiskit::{AlgebraError, FiniteField, Integers};
    ///
    /// assert!(FiniteField::modulo(&11, &Integers).is_ok());
    /// assert!(matches!(
    ///     FiniteField::modulo(&8, &Integers),
    ///     Err(AlgebraError::NonPrimeModulus { .. })
    /// ));
    /// ```
    pub fn modulo<F>(p: &E, field: &F) -> Result<Self, AlgebraError>
    where
        F: Field<Elem = E>,
    {
        if !field.contains(p) {
            return Err(AlgebraError::Precondition(format!(
                "modulus {p:?} is not an element of {field}"
            )));
        }

        let numbers = field.all_mod(p)?;
        let mut tables = OperationTables::with_capacity(numbers.len());
        for a in &numbers {
            for b in &numbers {
                let pair = (a.clone(), b.clone());
                tables.add.insert(pair.clone(), field.rem(&field.add(a, b), p)?);
                tables.mul.insert(pair, field.mul_mod(a, b, p)?);
            }
            tables.neg.insert(a.clone(), field.rem(&field.neg(a), p)?);
        }

        let one = field.one();
        for a in numbers.iter().filter(|a| !field.is_zero(a)) {
            let bezout = extended_euclid(field, a, p)?;
            let gcd = field.rem(&bezout.gcd, p)?;
            if gcd != one {
                debug!(modulus = ?p, residue = ?a, ?gcd, base = %field, "non-unit gcd");
                return Err(AlgebraError::NonPrimeModulus {
                    modulus: format!("{p:?}"),
                    gcd: format!("{gcd:?}"),
                });
            }
            tables.inv.insert(a.clone(), field.rem(&bezout.s, p)?);
        }

        let built = Self::new(numbers, field.zero(), one, tables)?;
        debug!(modulus = ?p, base = %field, elements = built.len(), "built finite field");
        Ok(built)
    }

    /// Build the extension field `GF(p)[X] / (poly)`.
    ///
    /// Coefficients of `poly` are reduced modulo `p` first, so `poly` can be
    /// written with plain base-field values (negative integers included).
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::NonPrimeModulus`] if `p` itself is not prime
    /// - [`AlgebraError::NonIrreduciblePolynomial`] if `poly` is reducible
    ///   over `GF(p)`
    ///
    /// # Example
    ///
    /// ```
    /// use galoiskit::{FiniteField, Integers, PolynomialField};
    ///
    /// let ring = PolynomialField::new("X", Integers);
    /// let gf16 = FiniteField::modulo_poly(&2, &ring.from_coeffs([1, 0, 0, 1, 1]), &Integers).unwrap();
    /// assert_eq!(gf16.len(), 16);
    /// ```
    pub fn modulo_poly<F>(
        p: &E,
        poly: &Poly<E>,
        field: &F,
    ) -> Result<FiniteField<Poly<E>>, AlgebraError>
    where
        F: Field<Elem = E>,
    {
        let prime = Self::modulo(p, field)?;
        Self::extend(prime, p, poly, field)
    }

    /// Second half of [`FiniteField::modulo_poly`], for callers that already
    /// hold `GF(p)`.
    pub(crate) fn extend<F>(
        prime: FiniteField<E>,
        p: &E,
        poly: &Poly<E>,
        field: &F,
    ) -> Result<FiniteField<Poly<E>>, AlgebraError>
    where
        F: Field<Elem = E>,
    {
        let coeffs = poly
            .coefficients()
            .iter()
            .map(|c| field.rem(c, p))
            .collect::<Result<Vec<_>, _>>()?;
        let ring = PolynomialField::new("X", prime);
        let modulus = ring.from_ascending(coeffs);

        FiniteField::modulo(&modulus, &ring).map_err(|err| match err {
            AlgebraError::NonPrimeModulus { gcd, .. } => AlgebraError::NonIrreduciblePolynomial {
                poly: ring.format(&modulus),
                gcd,
            },
            other => other,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false, a field has at least two elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All elements: zero, one, then the rest.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.elements.iter()
    }

    /// Stable index of `x`, `None` if it is not an element.
    pub fn index_of(&self, x: &E) -> Option<usize> {
        self.index.get(x).copied()
    }

    /// Export the operation tables keyed by element values.
    pub fn tables(&self) -> OperationTables<E> {
        let n = self.len();
        let mut tables = OperationTables::with_capacity(n);
        for (i, a) in self.elements.iter().enumerate() {
            for (j, b) in self.elements.iter().enumerate() {
                let pair = (a.clone(), b.clone());
                tables
                    .add
                    .insert(pair.clone(), self.elements[self.add[i * n + j]].clone());
                tables
                    .mul
                    .insert(pair, self.elements[self.mul[i * n + j]].clone());
            }
            tables.neg.insert(a.clone(), self.elements[self.neg[i]].clone());
            if let Some(k) = self.inv[i] {
                tables.inv.insert(a.clone(), self.elements[k].clone());
            }
        }
        tables
    }

    /// Check a single law over every pair or triple of elements.
    pub fn check_law(&self, law: FieldLaw) -> bool {
        let n = self.len();
        let add = |a: usize, b: usize| self.add[a * n + b];
        let mul = |a: usize, b: usize| self.mul[a * n + b];
        let pairs = || (0..n).flat_map(move |a| (0..n).map(move |b| (a, b)));
        let triples = || pairs().flat_map(move |(a, b)| (0..n).map(move |c| (a, b, c)));

        match law {
            FieldLaw::AddAssociative => {
                triples().all(|(a, b, c)| add(add(a, b), c) == add(a, add(b, c)))
            }
            FieldLaw::AddCommutative => pairs().all(|(a, b)| add(a, b) == add(b, a)),
            FieldLaw::AddIdentity => (0..n).all(|a| add(ZERO, a) == a),
            FieldLaw::AddInverse => (0..n).all(|a| add(a, self.neg[a]) == ZERO),
            FieldLaw::MulAssociative => {
                triples().all(|(a, b, c)| mul(mul(a, b), c) == mul(a, mul(b, c)))
            }
            FieldLaw::MulCommutative => pairs().all(|(a, b)| mul(a, b) == mul(b, a)),
            FieldLaw::MulIdentity => (0..n).all(|a| mul(ONE, a) == a),
            FieldLaw::MulInverse => {
                (1..n).all(|a| self.inv[a].is_some_and(|b| mul(a, b) == ONE))
            }
            FieldLaw::Distributive => triples()
                .all(|(a, b, c)| mul(add(a, b), c) == add(mul(a, c), mul(b, c))),
        }
    }

    /// Check all nine laws and report the ones that fail.
    ///
    /// O(n³); meant as a correctness oracle.
    pub fn check_report(&self) -> CheckReport {
        let failed: Vec<FieldLaw> = FieldLaw::ALL
            .into_iter()
            .filter(|&law| !self.check_law(law))
            .collect();
        for law in &failed {
            warn!(field = %self, %law, "field law does not hold");
        }
        CheckReport { failed }
    }

    /// Whether this is actually a field.
    pub fn check(&self) -> bool {
        self.check_report().is_ok()
    }

    /// Distinct powers `gen^0, gen^1, ...`, in order of appearance.
    pub fn mul_subgroup(&self, gen: &E) -> Vec<E> {
        let g = self.position(gen);
        self.subgroup_indices(g)
            .into_iter()
            .map(|i| self.elements[i].clone())
            .collect()
    }

    /// Elements whose powers cover every nonzero element.
    pub fn mul_generators(&self) -> Vec<E> {
        let n = self.len();
        (1..n)
            .filter(|&g| self.subgroup_indices(g).len() == n - 1)
            .map(|g| self.elements[g].clone())
            .collect()
    }

    fn subgroup_indices(&self, g: usize) -> Vec<usize> {
        let n = self.len();
        let mut seen = vec![false; n];
        let mut powers = Vec::new();
        let mut x = ONE;
        for _ in 0..n {
            if !seen[x] {
                seen[x] = true;
                powers.push(x);
            }
            x = self.mul[x * n + g];
        }
        powers
    }

    /// Sample a uniformly random element.
    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> E {
        self.elements[rng.gen_range(0..self.len())].clone()
    }

    /// Sample a uniformly random nonzero element.
    #[cfg(feature = "rand")]
    pub fn random_nonzero<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> E {
        self.elements[rng.gen_range(ONE..self.len())].clone()
    }

    fn position(&self, x: &E) -> usize {
        match self.index.get(x) {
            Some(&i) => i,
            None => panic!("{x:?} is not an element of {self}"),
        }
    }
}

impl<E: Clone + Eq + Hash + fmt::Debug> Field for FiniteField<E> {
    type Elem = E;
    type Key = usize;

    fn zero(&self) -> E {
        self.elements[ZERO].clone()
    }

    fn one(&self) -> E {
        self.elements[ONE].clone()
    }

    fn add(&self, x: &E, y: &E) -> E {
        let k = self.add[self.position(x) * self.len() + self.position(y)];
        self.elements[k].clone()
    }

    fn neg(&self, x: &E) -> E {
        self.elements[self.neg[self.position(x)]].clone()
    }

    fn mul(&self, x: &E, y: &E) -> E {
        let k = self.mul[self.position(x) * self.len() + self.position(y)];
        self.elements[k].clone()
    }

    fn inv(&self, x: &E) -> Result<E, AlgebraError> {
        self.inv[self.position(x)]
            .map(|k| self.elements[k].clone())
            .ok_or_else(|| AlgebraError::UndefinedInverse {
                element: format!("{x:?}"),
                field: self.to_string(),
            })
    }

    /// Index of the element.
    fn key(&self, x: &E) -> usize {
        self.position(x)
    }

    fn contains(&self, x: &E) -> bool {
        self.index.contains_key(x)
    }

    fn is_zero(&self, x: &E) -> bool {
        *x == self.elements[ZERO]
    }

    fn all_mod(&self, m: &E) -> Result<Vec<E>, AlgebraError> {
        let mut residues: Vec<E> = Vec::new();
        for e in &self.elements {
            let r = self.rem(e, m)?;
            if !residues.contains(&r) {
                residues.push(r);
            }
        }
        Ok(residues)
    }

    fn order(&self) -> Option<usize> {
        Some(self.len())
    }

    fn elements(&self) -> Option<Vec<E>> {
        Some(self.elements.clone())
    }
}

impl<E> fmt::Display for FiniteField<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.elements.len())
    }
}
