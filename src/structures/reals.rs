use core::fmt;

use crate::algebra::field::Field;
use crate::error::AlgebraError;

/// The real numbers, approximated by `f64`.
///
/// Division is the true reciprocal, so there is no remainder: [`Field::rem`]
/// is always zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reals;

impl Field for Reals {
    type Elem = f64;
    type Key = f64;

    fn zero(&self) -> f64 {
        0.0
    }

    fn one(&self) -> f64 {
        1.0
    }

    fn add(&self, x: &f64, y: &f64) -> f64 {
        x + y
    }

    fn neg(&self, x: &f64) -> f64 {
        -x
    }

    fn mul(&self, x: &f64, y: &f64) -> f64 {
        x * y
    }

    fn inv(&self, x: &f64) -> Result<f64, AlgebraError> {
        if *x == 0.0 {
            return Err(AlgebraError::UndefinedInverse {
                element: format!("{x:?}"),
                field: self.to_string(),
            });
        }
        Ok(1.0 / x)
    }

    fn key(&self, x: &f64) -> f64 {
        *x
    }

    /// Finite real numbers only.
    fn contains(&self, x: &f64) -> bool {
        x.is_finite()
    }

    fn sub(&self, x: &f64, y: &f64) -> f64 {
        x - y
    }

    fn div(&self, x: &f64, y: &f64) -> Result<f64, AlgebraError> {
        if *y == 0.0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(x / y)
    }

    fn rem(&self, _x: &f64, y: &f64) -> Result<f64, AlgebraError> {
        if *y == 0.0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(0.0)
    }
}

impl fmt::Display for Reals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reals")
    }
}
