use crate::algebra::field::Field;
use crate::error::AlgebraError;

/// Iterator over the set bits of an integer, as powers of two, ascending.
#[derive(Clone, Debug)]
pub struct Bits(u64);

impl Iterator for Bits {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }
        // isolate the lowest set bit
        let bit = self.0 & self.0.wrapping_neg();
        self.0 ^= bit;
        Some(bit)
    }
}

/// Decompose `n` into its binary powers.
///
/// ```
/// use galoiskit::bits;
///
/// assert_eq!(bits(221).collect::<Vec<_>>(), vec![1, 4, 8, 16, 64, 128]);
/// ```
pub fn bits(n: u64) -> Bits {
    Bits(n)
}

/// Compute `g^n mod p` with O(log n) multiplications.
///
/// For every set bit `b` of `n`, `g^b mod p` is obtained by repeatedly
/// squaring the previous power and multiplied into the result. Every
/// intermediate value is reduced modulo `p`.
///
/// # Errors
///
/// [`AlgebraError::Precondition`] if `g` or `p` is not an element of `field`;
/// otherwise propagates failures of [`Field::rem`].
///
/// # Example
///
/// ```
/// use galoiskit::{powermod, Integers};
///
/// assert_eq!(powermod(&113, 221, &310, &Integers), Ok(193));
/// ```
pub fn powermod<F: Field>(
    g: &F::Elem,
    n: u64,
    p: &F::Elem,
    field: &F,
) -> Result<F::Elem, AlgebraError> {
    for x in [g, p] {
        if !field.contains(x) {
            return Err(AlgebraError::Precondition(format!(
                "{x:?} is not an element of {field}"
            )));
        }
    }

    let mut result = field.one();
    // square = g^power mod p
    let mut square = field.rem(g, p)?;
    let mut power = 1u64;
    for bit in bits(n) {
        while power < bit {
            square = field.mul_mod(&square, &square, p)?;
            power <<= 1;
        }
        result = field.mul_mod(&result, &square, p)?;
    }
    Ok(result)
}
