use core::fmt;

use crate::error::AlgebraError;

/// A field, described by an object that performs arithmetic on its elements.
///
/// Unlike a type-level field, the arithmetic lives on a value implementing
/// this trait, so the same element type can belong to different fields
/// (`i64` in [`Integers`](crate::Integers) or in `GF(7)`), and fields can be
/// built at runtime.
///
/// Implementors provide `zero`, `one`, `add`, `neg`, `mul`, `inv` and `key`.
/// Everything else is derived from those and only needs overriding where a
/// field has its own canonical form (floor division for integers, long
/// division for polynomials).
///
/// Laws (checked exhaustively for finite fields by
/// [`FiniteField::check`](crate::FiniteField::check)):
/// - `(F, add)` is an abelian group with identity `zero`
/// - `(F \ {zero}, mul)` is an abelian group with identity `one`
/// - `mul` distributes over `add`
pub trait Field: fmt::Display {
    /// Element representation.
    type Elem: Clone + PartialEq + fmt::Debug;

    /// Ordering key used to decide which of two elements is "larger".
    ///
    /// Identity for numbers, degree + 1 for polynomials.
    type Key: PartialOrd;

    /// Additive identity.
    fn zero(&self) -> Self::Elem;

    /// Multiplicative identity.
    fn one(&self) -> Self::Elem;

    fn add(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    fn neg(&self, x: &Self::Elem) -> Self::Elem;

    fn mul(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    /// Multiplicative inverse `x⁻¹`.
    ///
    /// Fails with [`AlgebraError::UndefinedInverse`] for `zero` and for any
    /// element the field cannot invert.
    fn inv(&self, x: &Self::Elem) -> Result<Self::Elem, AlgebraError>;

    /// Size key of an element.
    fn key(&self, x: &Self::Elem) -> Self::Key;

    /// Membership test.
    fn contains(&self, _x: &Self::Elem) -> bool {
        true
    }

    #[inline]
    fn is_zero(&self, x: &Self::Elem) -> bool {
        *x == self.zero()
    }

    /// `x - y`
    fn sub(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        self.add(x, &self.neg(y))
    }

    /// `x * y⁻¹`
    fn div(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem, AlgebraError> {
        Ok(self.mul(x, &self.inv(y)?))
    }

    /// Remainder consistent with [`Field::div`]: `x = div(x, y) * y + rem(x, y)`.
    ///
    /// Always `zero` in a true field.
    fn rem(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem, AlgebraError> {
        let q = self.div(x, y)?;
        Ok(self.sub(x, &self.mul(&q, y)))
    }

    /// `rem(x * y, m)`.
    ///
    /// Fields whose products can overflow before the reduction override
    /// this to reduce in a wider type.
    fn mul_mod(
        &self,
        x: &Self::Elem,
        y: &Self::Elem,
        m: &Self::Elem,
    ) -> Result<Self::Elem, AlgebraError> {
        self.rem(&self.mul(x, y), m)
    }

    /// Quotient and remainder in one call.
    fn div_rem(
        &self,
        x: &Self::Elem,
        y: &Self::Elem,
    ) -> Result<(Self::Elem, Self::Elem), AlgebraError> {
        Ok((self.div(x, y)?, self.rem(x, y)?))
    }

    /// `x^n` by repeated multiplication, O(n).
    ///
    /// Use [`powermod`](crate::dlp::powermod) when a logarithmic number of
    /// multiplications is needed.
    fn pow(&self, x: &Self::Elem, n: u64) -> Self::Elem {
        let mut result = self.one();
        for _ in 0..n {
            result = self.mul(&result, x);
        }
        result
    }

    /// Image of a machine integer: `one + one + ... + one` (`i` times).
    ///
    /// O(i), meant for small loop counters.
    fn from_int(&self, i: u64) -> Self::Elem {
        let one = self.one();
        let mut result = self.zero();
        for _ in 0..i {
            result = self.add(&result, &one);
        }
        result
    }

    /// Inverse of `x` when `x` is a unit of the underlying ring, `None`
    /// otherwise.
    ///
    /// The extended Euclidean algorithm scales its gcd by this value so that
    /// a unit gcd is always reported as `one`.
    fn unit_inverse(&self, x: &Self::Elem) -> Option<Self::Elem> {
        self.inv(x).ok()
    }

    /// All residues modulo `m`.
    fn all_mod(&self, _m: &Self::Elem) -> Result<Vec<Self::Elem>, AlgebraError> {
        Err(AlgebraError::Unsupported {
            op: "all_mod",
            field: self.to_string(),
        })
    }

    /// Number of elements, `None` when the field is infinite.
    fn order(&self) -> Option<usize> {
        None
    }

    /// Every element of a finite field, `None` when the field is infinite.
    fn elements(&self) -> Option<Vec<Self::Elem>> {
        None
    }

    /// Number of distinct residues modulo `m`, when finite.
    fn residue_count(&self, _m: &Self::Elem) -> Option<u64> {
        None
    }
}
