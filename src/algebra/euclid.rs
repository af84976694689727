//! Extended Euclidean algorithm over any [`Field`].

use tracing::trace;

use crate::algebra::field::Field;
use crate::error::AlgebraError;

/// Result of the extended Euclidean algorithm: `gcd = s*a + t*b`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bezout<E> {
    pub gcd: E,
    pub s: E,
    pub t: E,
}

/// One row of the iteration: `remainder = s*a + t*b`.
#[derive(Clone, Debug, PartialEq)]
pub struct EuclidStep<E> {
    pub remainder: E,
    pub s: E,
    pub t: E,
}

/// Compute `gcd(a, b)` together with Bézout coefficients.
///
/// The field's [`Field::key`] picks which argument is divided first, since
/// elements such as polynomials have no natural order. When the final gcd is
/// a unit (see [`Field::unit_inverse`]) the whole triple is rescaled so that
/// `gcd == field.one()`; a non-unit gcd is returned unchanged.
///
/// # Errors
///
/// Propagates division failures from [`Field::div_rem`].
///
/// # Example
///
/// ```
/// use galoiskit::{extended_euclid, Field, Integers};
///
/// let b = extended_euclid(&Integers, &240, &46).unwrap();
/// assert_eq!(b.gcd, 2);
/// assert_eq!(b.s * 240 + b.t * 46, 2);
/// ```
pub fn extended_euclid<F: Field>(
    field: &F,
    a: &F::Elem,
    b: &F::Elem,
) -> Result<Bezout<F::Elem>, AlgebraError> {
    run(field, a, b, |_| {})
}

/// Same as [`extended_euclid`], also returning every intermediate row.
///
/// The last row holds the raw gcd before unit normalization.
pub fn extended_euclid_steps<F: Field>(
    field: &F,
    a: &F::Elem,
    b: &F::Elem,
) -> Result<(Bezout<F::Elem>, Vec<EuclidStep<F::Elem>>), AlgebraError> {
    let mut steps = Vec::new();
    let bezout = run(field, a, b, |step| steps.push(step))?;
    Ok((bezout, steps))
}

fn run<F: Field>(
    field: &F,
    a: &F::Elem,
    b: &F::Elem,
    mut on_step: impl FnMut(EuclidStep<F::Elem>),
) -> Result<Bezout<F::Elem>, AlgebraError> {
    let zero = field.zero();
    let one = field.one();

    // Rows keep `r = s*a + t*b` in argument order whichever side is larger.
    let row_a = (a.clone(), one.clone(), zero.clone());
    let row_b = (b.clone(), zero, one.clone());
    let (mut prev, mut curr) = if field.key(b) > field.key(a) {
        (row_b, row_a)
    } else {
        (row_a, row_b)
    };

    on_step(EuclidStep {
        remainder: prev.0.clone(),
        s: prev.1.clone(),
        t: prev.2.clone(),
    });

    while !field.is_zero(&curr.0) {
        on_step(EuclidStep {
            remainder: curr.0.clone(),
            s: curr.1.clone(),
            t: curr.2.clone(),
        });

        let (quotient, remainder) = field.div_rem(&prev.0, &curr.0)?;
        let minus_q = field.neg(&quotient);
        let s = field.add(&field.mul(&minus_q, &curr.1), &prev.1);
        let t = field.add(&field.mul(&minus_q, &curr.2), &prev.2);
        trace!(?quotient, ?remainder, "euclid step");

        prev = curr;
        curr = (remainder, s, t);
    }

    let (gcd, s, t) = prev;
    if gcd == one {
        return Ok(Bezout { gcd, s, t });
    }

    match field.unit_inverse(&gcd) {
        Some(u) => Ok(Bezout {
            gcd: field.mul(&u, &gcd),
            s: field.mul(&u, &s),
            t: field.mul(&u, &t),
        }),
        None => Ok(Bezout { gcd, s, t }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::integers::Integers;
    use crate::structures::poly::PolynomialField;
    use crate::structures::reals::Reals;
    use crate::FiniteField;

    fn assert_bezout(a: i64, b: i64) {
        let r = extended_euclid(&Integers, &a, &b).unwrap();
        assert_eq!(r.s * a + r.t * b, r.gcd, "a = {a}, b = {b}");
    }

    #[test]
    fn integers_coprime() {
        let r = extended_euclid(&Integers, &3, &7).unwrap();
        assert_eq!(r.gcd, 1);
        assert_eq!(r.s * 3 + r.t * 7, 1);
        // s is the inverse of 3 modulo 7
        assert_eq!(r.s.rem_euclid(7), 5);
    }

    #[test]
    fn integers_common_factor() {
        let r = extended_euclid(&Integers, &12, &34).unwrap();
        assert_eq!(r.gcd, 2);
        assert_eq!(r.s * 12 + r.t * 34, 2);
    }

    #[test]
    fn argument_order_does_not_matter() {
        let ab = extended_euclid(&Integers, &46, &240).unwrap();
        let ba = extended_euclid(&Integers, &240, &46).unwrap();
        assert_eq!(ab.gcd, ba.gcd);
        assert_eq!(ab.s, ba.t);
        assert_eq!(ab.t, ba.s);
    }

    #[test]
    fn identity_holds_for_many_pairs() {
        for a in -20..=20 {
            for b in -20..=20 {
                assert_bezout(a, b);
            }
        }
    }

    #[test]
    fn negative_unit_gcd_is_normalized() {
        let r = extended_euclid(&Integers, &-5, &3).unwrap();
        assert_eq!(r.gcd, 1);
        assert_eq!(r.s * -5 + r.t * 3, 1);
    }

    #[test]
    fn zero_and_zero() {
        let r = extended_euclid(&Integers, &0, &0).unwrap();
        assert_eq!(r.gcd, 0);
    }

    #[test]
    fn reals_gcd_is_one() {
        let r = extended_euclid(&Reals, &3.0, &0.5).unwrap();
        assert_eq!(r.gcd, 1.0);
        assert_eq!(r.s * 3.0 + r.t * 0.5, 1.0);
    }

    #[test]
    fn steps_record_every_remainder() {
        let (r, steps) = extended_euclid_steps(&Integers, &240, &46).unwrap();
        let remainders: Vec<i64> = steps.iter().map(|s| s.remainder).collect();
        assert_eq!(remainders, vec![240, 46, 10, 6, 4, 2]);
        for step in &steps {
            assert_eq!(step.s * 240 + step.t * 46, step.remainder);
        }
        assert_eq!(r.gcd, 2);
    }

    #[test]
    fn polynomials_over_gf5() {
        // Over GF(5) a constant gcd like 3 must be rescaled to one.
        let f5 = FiniteField::modulo(&5, &Integers).unwrap();
        let ring = PolynomialField::new("X", f5);
        let a = ring.from_coeffs([2, 1]); // 2X + 1
        let b = ring.from_coeffs([1, 0, 2]); // X^2 + 2, irreducible over GF(5)
        let r = extended_euclid(&ring, &a, &b).unwrap();
        let combo = ring.add(&ring.mul(&r.s, &a), &ring.mul(&r.t, &b));
        assert_eq!(combo, r.gcd);
        assert_eq!(r.gcd, ring.one());
    }

    #[test]
    fn polynomials_with_common_factor() {
        let f2 = FiniteField::modulo(&2, &Integers).unwrap();
        let ring = PolynomialField::new("X", f2);
        let a = ring.from_coeffs([1, 1]); // X + 1
        let b = ring.from_coeffs([1, 0, 1]); // X^2 + 1 = (X + 1)^2
        let r = extended_euclid(&ring, &a, &b).unwrap();
        assert_eq!(r.gcd, a);
        assert_eq!(ring.key(&r.gcd), 2);
    }
}
