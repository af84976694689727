use core::fmt;

use crate::algebra::field::Field;
use crate::error::AlgebraError;

/// Polynomial with coefficients of type `E`.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// The zero polynomial is represented as an empty coefficient vector and the
/// leading coefficient of any other polynomial is nonzero, so equality and
/// hashing compare values rather than representations. Since `E` does not
/// know its own zero, polynomials are built through a [`PolynomialField`],
/// which trims them.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Poly<E> {
    coeffs: Vec<E>,
}

impl<E> Poly<E> {
    /// Create the zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<&E> {
        self.coeffs.last()
    }

    /// Get a slice of all coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[E] {
        &self.coeffs
    }
}

impl<E: Clone> Poly<E> {
    /// Coefficients highest degree first, the way the polynomial is written.
    pub fn coeffs_desc(&self) -> Vec<E> {
        self.coeffs.iter().rev().cloned().collect()
    }
}

/// Deserializes from a list of coefficients, lowest degree first, dropping
/// trailing zeros.
#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for Poly<E>
where
    E: serde::Deserialize<'de> + num_traits::Zero,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut coeffs = Vec::<E>::deserialize(deserializer)?;
        while coeffs.last().is_some_and(num_traits::Zero::is_zero) {
            coeffs.pop();
        }
        Ok(Self { coeffs })
    }
}

impl<E: fmt::Debug> fmt::Debug for Poly<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.coeffs.iter().rev()).finish()
    }
}

/// Polynomials in one variable over a base field.
///
/// Strictly a ring: [`Field::inv`] always fails. Inverses only exist modulo
/// an irreducible polynomial, which is what
/// [`FiniteField::modulo_poly`](crate::FiniteField::modulo_poly) builds.
///
/// Long division ([`Field::div_rem`]) needs the base field to divide each
/// leading coefficient exactly; over [`Integers`](crate::Integers) it fails
/// as soon as a leading term cannot be eliminated.
///
/// # Example
///
/// ```
/// use galoiskit::{Field, Integers, PolynomialField};
///
/// let ring = PolynomialField::new("X", Integers);
/// let f = ring.from_coeffs([3, 2, -2, 2]); // 3X^3 + 2X^2 - 2X + 2
/// let g = ring.from_coeffs([1, 0, 4]); // X^2 + 4
///
/// let (q, r) = ring.div_rem(&f, &g).unwrap();
/// assert_eq!(q, ring.from_coeffs([3, 2]));
/// assert_eq!(r, ring.from_coeffs([-14, -6]));
/// ```
#[derive(Clone, Debug)]
pub struct PolynomialField<F> {
    var: String,
    base: F,
}

impl<F: Field> PolynomialField<F> {
    /// Polynomials in `var` with coefficients in `base`.
    pub fn new(var: impl Into<String>, base: F) -> Self {
        Self {
            var: var.into(),
            base,
        }
    }

    /// Name of the formal variable.
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Coefficient field.
    pub fn base(&self) -> &F {
        &self.base
    }

    /// Create a polynomial from coefficients given highest degree first.
    ///
    /// Leading zeros are removed.
    pub fn from_coeffs(&self, coeffs: impl IntoIterator<Item = F::Elem>) -> Poly<F::Elem> {
        let mut coeffs: Vec<F::Elem> = coeffs.into_iter().collect();
        coeffs.reverse();
        self.normalize(coeffs)
    }

    /// Create a polynomial from coefficients in ascending order of degree.
    pub fn from_ascending(&self, coeffs: Vec<F::Elem>) -> Poly<F::Elem> {
        self.normalize(coeffs)
    }

    /// Create a constant polynomial.
    pub fn constant(&self, c: F::Elem) -> Poly<F::Elem> {
        self.normalize(vec![c])
    }

    /// The polynomial `x`.
    pub fn x(&self) -> Poly<F::Elem> {
        self.normalize(vec![self.base.zero(), self.base.one()])
    }

    /// Coefficient of `x^i`, zero beyond the degree.
    pub fn coeff(&self, p: &Poly<F::Elem>, i: usize) -> F::Elem {
        p.coeffs.get(i).cloned().unwrap_or_else(|| self.base.zero())
    }

    /// Evaluate `p` at `x` using Horner's method.
    pub fn eval(&self, p: &Poly<F::Elem>, x: &F::Elem) -> F::Elem {
        p.coeffs.iter().rev().fold(self.base.zero(), |acc, c| {
            self.base.add(&self.base.mul(&acc, x), c)
        })
    }

    /// Render `p` in the field's variable, highest degree first.
    pub fn format(&self, p: &Poly<F::Elem>) -> String {
        if p.is_zero() {
            return "0".to_string();
        }

        let one = self.base.one();
        let mut terms = Vec::new();
        for (i, c) in p.coeffs.iter().enumerate().rev() {
            if self.base.is_zero(c) {
                continue;
            }
            let term = match i {
                0 => format!("{c:?}"),
                1 if *c == one => self.var.clone(),
                1 => format!("{c:?}*{}", self.var),
                _ if *c == one => format!("{}^{i}", self.var),
                _ => format!("{c:?}*{}^{i}", self.var),
            };
            terms.push(term);
        }
        terms.join(" + ")
    }

    /// Remove trailing zero coefficients.
    fn normalize(&self, mut coeffs: Vec<F::Elem>) -> Poly<F::Elem> {
        while coeffs.last().is_some_and(|c| self.base.is_zero(c)) {
            coeffs.pop();
        }
        Poly { coeffs }
    }
}

impl<F: Field> Field for PolynomialField<F> {
    type Elem = Poly<F::Elem>;
    type Key = usize;

    fn zero(&self) -> Self::Elem {
        Poly::zero()
    }

    fn one(&self) -> Self::Elem {
        self.constant(self.base.one())
    }

    fn add(&self, f: &Self::Elem, g: &Self::Elem) -> Self::Elem {
        let len = f.coeffs.len().max(g.coeffs.len());
        let coeffs = (0..len)
            .map(|i| self.base.add(&self.coeff(f, i), &self.coeff(g, i)))
            .collect();
        self.normalize(coeffs)
    }

    fn neg(&self, f: &Self::Elem) -> Self::Elem {
        let coeffs = f.coeffs.iter().map(|c| self.base.neg(c)).collect();
        self.normalize(coeffs)
    }

    /// Naive O(n*m) convolution.
    fn mul(&self, f: &Self::Elem, g: &Self::Elem) -> Self::Elem {
        if f.is_zero() || g.is_zero() {
            return Poly::zero();
        }

        let n = f.coeffs.len();
        let m = g.coeffs.len();
        let mut coeffs = vec![self.base.zero(); n + m - 1];

        for (i, a) in f.coeffs.iter().enumerate() {
            for (j, b) in g.coeffs.iter().enumerate() {
                coeffs[i + j] = self.base.add(&coeffs[i + j], &self.base.mul(a, b));
            }
        }

        self.normalize(coeffs)
    }

    fn inv(&self, f: &Self::Elem) -> Result<Self::Elem, AlgebraError> {
        Err(AlgebraError::UndefinedInverse {
            element: self.format(f),
            field: self.to_string(),
        })
    }

    /// Degree + 1, with the zero polynomial at 0.
    fn key(&self, f: &Self::Elem) -> usize {
        f.coeffs.len()
    }

    fn contains(&self, f: &Self::Elem) -> bool {
        let trimmed = f.coeffs.last().map_or(true, |c| !self.base.is_zero(c));
        trimmed && f.coeffs.iter().all(|c| self.base.contains(c))
    }

    fn div(&self, f: &Self::Elem, g: &Self::Elem) -> Result<Self::Elem, AlgebraError> {
        self.div_rem(f, g).map(|(q, _)| q)
    }

    fn rem(&self, f: &Self::Elem, g: &Self::Elem) -> Result<Self::Elem, AlgebraError> {
        self.div_rem(f, g).map(|(_, r)| r)
    }

    /// Polynomial long division.
    ///
    /// Each step divides the running leading coefficient by the divisor's
    /// leading coefficient in the base field and subtracts the scaled divisor.
    /// If that does not cancel the leading term the division fails with
    /// [`AlgebraError::ExactDivision`].
    fn div_rem(
        &self,
        f: &Self::Elem,
        g: &Self::Elem,
    ) -> Result<(Self::Elem, Self::Elem), AlgebraError> {
        let Some(lead) = g.leading_coeff() else {
            return Err(AlgebraError::DivisionByZero);
        };

        let n = f.coeffs.len();
        let m = g.coeffs.len();
        if n < m {
            return Ok((Poly::zero(), f.clone()));
        }

        let mut remainder = f.coeffs.clone();
        let mut quotient = vec![self.base.zero(); n - m + 1];

        for top in (m - 1..n).rev() {
            let deg_diff = top + 1 - m;
            let factor = self.base.div(&remainder[top], lead)?;

            // remainder -= factor * x^deg_diff * g
            for (i, d) in g.coeffs.iter().enumerate() {
                let scaled = self.base.mul(&factor, d);
                remainder[i + deg_diff] = self.base.sub(&remainder[i + deg_diff], &scaled);
            }
            if !self.base.is_zero(&remainder[top]) {
                return Err(AlgebraError::ExactDivision {
                    dividend: self.format(f),
                    divisor: self.format(g),
                    field: self.base.to_string(),
                });
            }

            quotient[deg_diff] = factor;
            remainder.truncate(top);
        }

        Ok((self.normalize(quotient), self.normalize(remainder)))
    }

    /// Nonzero constants.
    fn unit_inverse(&self, f: &Self::Elem) -> Option<Self::Elem> {
        match f.coeffs.as_slice() {
            [c] => self.base.inv(c).ok().map(|inv| self.constant(inv)),
            _ => None,
        }
    }

    /// Every polynomial of degree below `deg(f)`, reduced modulo `f`.
    ///
    /// Needs a finite base field. The zero polynomial comes first.
    fn all_mod(&self, f: &Self::Elem) -> Result<Vec<Self::Elem>, AlgebraError> {
        let elems = self.base.elements().ok_or_else(|| AlgebraError::Unsupported {
            op: "all_mod",
            field: self.to_string(),
        })?;
        let deg = f.degree().ok_or(AlgebraError::DivisionByZero)?;
        let total = u32::try_from(deg)
            .ok()
            .and_then(|d| elems.len().checked_pow(d))
            .ok_or_else(|| AlgebraError::Unsupported {
                op: "all_mod",
                field: self.to_string(),
            })?;

        let mut residues: Vec<Self::Elem> = Vec::with_capacity(total);
        for mut index in 0..total {
            // Odometer over the coefficient tuples, constant term fastest.
            let mut coeffs = Vec::with_capacity(deg);
            for _ in 0..deg {
                coeffs.push(elems[index % elems.len()].clone());
                index /= elems.len();
            }
            let residue = self.rem(&self.normalize(coeffs), f)?;
            if !residues.contains(&residue) {
                residues.push(residue);
            }
        }
        Ok(residues)
    }

    fn residue_count(&self, f: &Self::Elem) -> Option<u64> {
        let q = u64::try_from(self.base.order()?).ok()?;
        q.checked_pow(u32::try_from(f.degree()?).ok()?)
    }
}

impl<F: Field> fmt::Display for PolynomialField<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.base, self.var)
    }
}
