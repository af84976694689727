use core::fmt;

use num_integer::Integer;

use crate::algebra::field::Field;
use crate::error::AlgebraError;

/// The integers, as `i64`.
///
/// Strictly a ring: only `±1` are invertible. Division and remainder are the
/// floor variants, so `rem(x, m)` lies in `0..m` for a positive modulus and
/// `Integers` can serve as the base for [`FiniteField::modulo`].
///
/// Arithmetic follows `i64` overflow semantics.
///
/// [`FiniteField::modulo`]: crate::FiniteField::modulo
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Integers;

impl Field for Integers {
    type Elem = i64;
    type Key = i64;

    fn zero(&self) -> i64 {
        0
    }

    fn one(&self) -> i64 {
        1
    }

    fn add(&self, x: &i64, y: &i64) -> i64 {
        x + y
    }

    fn neg(&self, x: &i64) -> i64 {
        -x
    }

    fn mul(&self, x: &i64, y: &i64) -> i64 {
        x * y
    }

    fn inv(&self, x: &i64) -> Result<i64, AlgebraError> {
        match x {
            1 | -1 => Ok(*x),
            _ => Err(AlgebraError::UndefinedInverse {
                element: x.to_string(),
                field: self.to_string(),
            }),
        }
    }

    fn key(&self, x: &i64) -> i64 {
        *x
    }

    fn sub(&self, x: &i64, y: &i64) -> i64 {
        x - y
    }

    /// Floor division.
    fn div(&self, x: &i64, y: &i64) -> Result<i64, AlgebraError> {
        if *y == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Integer::div_floor(x, y))
    }

    /// Floor remainder, with the sign of `y`.
    fn rem(&self, x: &i64, y: &i64) -> Result<i64, AlgebraError> {
        if *y == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Integer::mod_floor(x, y))
    }

    fn div_rem(&self, x: &i64, y: &i64) -> Result<(i64, i64), AlgebraError> {
        if *y == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Integer::div_mod_floor(x, y))
    }

    /// Product reduced through `i128`, exact for every `i64` operand.
    fn mul_mod(&self, x: &i64, y: &i64, m: &i64) -> Result<i64, AlgebraError> {
        if *m == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        let product = i128::from(*x) * i128::from(*y);
        let reduced = Integer::mod_floor(&product, &i128::from(*m));
        // |reduced| < |m|
        Ok(reduced as i64)
    }

    /// Square-and-multiply over the bits of `n`.
    fn pow(&self, x: &i64, n: u64) -> i64 {
        let mut base = *x;
        let mut result = 1i64;
        let mut e = n;
        while e > 0 {
            if e & 1 == 1 {
                result *= base;
            }
            e >>= 1;
            if e > 0 {
                base *= base;
            }
        }
        result
    }

    fn from_int(&self, i: u64) -> i64 {
        i as i64
    }

    /// `{0, 1, ..., m - 1}`; empty for `m <= 0`.
    fn all_mod(&self, m: &i64) -> Result<Vec<i64>, AlgebraError> {
        Ok((0..*m).collect())
    }

    fn residue_count(&self, m: &i64) -> Option<u64> {
        (*m > 0).then_some(m.unsigned_abs())
    }
}

impl fmt::Display for Integers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integers")
    }
}
