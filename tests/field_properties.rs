use std::fmt::Debug;
use std::hash::Hash;
use std::sync::OnceLock;

use num_integer::Integer;
use proptest::prelude::*;

use galoiskit::{
    extended_euclid, powermod, BabyStepGiantStep, BruteForce, DlpSolver, Field,
    FiniteField, Integers, Poly, PolynomialField,
};

/// Trial division, as an oracle for `FiniteField::modulo`.
fn is_prime(n: i64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

fn gf17() -> &'static FiniteField<i64> {
    static FIELD: OnceLock<FiniteField<i64>> = OnceLock::new();
    FIELD.get_or_init(|| FiniteField::modulo(&17, &Integers).unwrap())
}

fn gf101() -> &'static FiniteField<i64> {
    static FIELD: OnceLock<FiniteField<i64>> = OnceLock::new();
    FIELD.get_or_init(|| FiniteField::modulo(&101, &Integers).unwrap())
}

/// GF(16) = GF(2)[X] / (X^4 + X + 1)
fn gf16() -> &'static FiniteField<Poly<i64>> {
    static FIELD: OnceLock<FiniteField<Poly<i64>>> = OnceLock::new();
    FIELD.get_or_init(|| {
        let ring = PolynomialField::new("X", Integers);
        FiniteField::modulo_poly(&2, &ring.from_coeffs([1, 0, 0, 1, 1]), &Integers).unwrap()
    })
}

fn arb_elem<E>(field: &'static FiniteField<E>) -> impl Strategy<Value = E>
where
    E: Clone + Eq + Hash + Debug,
{
    (0..field.len()).prop_map(move |i| field.elements()[i].clone())
}

fn arb_nonzero<E>(field: &'static FiniteField<E>) -> impl Strategy<Value = E>
where
    E: Clone + Eq + Hash + Debug,
{
    (1..field.len()).prop_map(move |i| field.elements()[i].clone())
}

// ===== Addition properties =====

proptest! {
    #[test]
    fn addition_commutative(a in arb_elem(gf17()), b in arb_elem(gf17())) {
        let f = gf17();
        prop_assert_eq!(f.add(&a, &b), f.add(&b, &a));
    }
}

proptest! {
    #[test]
    fn addition_associative(a in arb_elem(gf17()), b in arb_elem(gf17()), c in arb_elem(gf17())) {
        let f = gf17();
        prop_assert_eq!(f.add(&f.add(&a, &b), &c), f.add(&a, &f.add(&b, &c)));
    }
}

proptest! {
    #[test]
    fn additive_identity(a in arb_elem(gf17())) {
        let f = gf17();
        prop_assert_eq!(f.add(&a, &f.zero()), a);
    }
}

proptest! {
    #[test]
    fn additive_inverse(a in arb_elem(gf17())) {
        let f = gf17();
        prop_assert_eq!(f.add(&a, &f.neg(&a)), f.zero());
        prop_assert_eq!(f.neg(&f.neg(&a)), a);
    }
}

proptest! {
    #[test]
    fn subtraction_definition(a in arb_elem(gf17()), b in arb_elem(gf17())) {
        let f = gf17();
        prop_assert_eq!(f.sub(&a, &b), f.add(&a, &f.neg(&b)));
        prop_assert_eq!(f.sub(&a, &a), f.zero());
    }
}

// ===== Multiplication properties =====

proptest! {
    #[test]
    fn multiplication_commutative(a in arb_elem(gf17()), b in arb_elem(gf17())) {
        let f = gf17();
        prop_assert_eq!(f.mul(&a, &b), f.mul(&b, &a));
    }
}

proptest! {
    #[test]
    fn multiplication_associative(a in arb_elem(gf17()), b in arb_elem(gf17()), c in arb_elem(gf17())) {
        let f = gf17();
        prop_assert_eq!(f.mul(&f.mul(&a, &b), &c), f.mul(&a, &f.mul(&b, &c)));
    }
}

proptest! {
    #[test]
    fn multiplicative_identity_and_zero(a in arb_elem(gf17())) {
        let f = gf17();
        prop_assert_eq!(f.mul(&a, &f.one()), a);
        prop_assert_eq!(f.mul(&a, &f.zero()), f.zero());
    }
}

// ===== Distributivity =====

proptest! {
    #[test]
    fn distributive(a in arb_elem(gf17()), b in arb_elem(gf17()), c in arb_elem(gf17())) {
        let f = gf17();
        prop_assert_eq!(
            f.mul(&a, &f.add(&b, &c)),
            f.add(&f.mul(&a, &b), &f.mul(&a, &c))
        );
    }
}

// ===== Inverse and division =====

proptest! {
    #[test]
    fn multiplicative_inverse(a in arb_nonzero(gf17())) {
        let f = gf17();
        let inv = f.inv(&a).unwrap();
        prop_assert_eq!(f.mul(&a, &inv), f.one());
        prop_assert_eq!(f.inv(&inv).unwrap(), a);
    }
}

proptest! {
    #[test]
    fn division_consistency(a in arb_elem(gf17()), b in arb_nonzero(gf17())) {
        let f = gf17();
        let q = f.div(&a, &b).unwrap();
        prop_assert_eq!(f.mul(&q, &b), a);
        prop_assert_eq!(f.rem(&a, &b).unwrap(), f.zero());
    }
}

#[test]
fn zero_has_no_inverse() {
    assert!(gf17().inv(&0).is_err());
    assert!(gf16().inv(&Poly::zero()).is_err());
}

// ===== Tests with a larger prime =====

mod larger_prime {
    use super::*;

    proptest! {
        #[test]
        fn distributive(a in arb_elem(gf101()), b in arb_elem(gf101()), c in arb_elem(gf101())) {
            let f = gf101();
            prop_assert_eq!(
                f.mul(&f.add(&a, &b), &c),
                f.add(&f.mul(&a, &c), &f.mul(&b, &c))
            );
        }
    }

    proptest! {
        #[test]
        fn inverse_matches_fermat(a in arb_nonzero(gf101())) {
            // a^(p-2) = a⁻¹ mod p
            let fermat = powermod(&a, 99, &101, &Integers).unwrap();
            prop_assert_eq!(gf101().inv(&a).unwrap(), fermat);
        }
    }

    proptest! {
        #[test]
        fn pow_matches_powermod(a in arb_elem(gf101()), n in 0u64..300) {
            let f = gf101();
            prop_assert_eq!(f.pow(&a, n), powermod(&a, n, &101, &Integers).unwrap());
        }
    }
}

// ===== Extension field =====

mod extension {
    use super::*;

    proptest! {
        #[test]
        fn distributive(a in arb_elem(gf16()), b in arb_elem(gf16()), c in arb_elem(gf16())) {
            let f = gf16();
            prop_assert_eq!(
                f.mul(&a, &f.add(&b, &c)),
                f.add(&f.mul(&a, &b), &f.mul(&a, &c))
            );
        }
    }

    proptest! {
        #[test]
        fn multiplicative_inverse(a in arb_nonzero(gf16())) {
            let f = gf16();
            prop_assert_eq!(f.mul(&a, &f.inv(&a).unwrap()), f.one());
        }
    }

    proptest! {
        #[test]
        fn characteristic_two(a in arb_elem(gf16())) {
            let f = gf16();
            prop_assert_eq!(f.add(&a, &a), f.zero());
        }
    }

    proptest! {
        #[test]
        fn order_divides_fifteen(a in arb_nonzero(gf16())) {
            let f = gf16();
            prop_assert_eq!(f.pow(&a, 15), f.one());
        }
    }
}

// ===== Euclid and construction =====

proptest! {
    #[test]
    fn bezout_identity(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let r = extended_euclid(&Integers, &a, &b).unwrap();
        prop_assert_eq!(r.s * a + r.t * b, r.gcd);
        prop_assert_eq!(r.gcd.abs(), a.gcd(&b));
    }
}

proptest! {
    #[test]
    fn modulo_accepts_exactly_primes(p in 2i64..120) {
        let built = FiniteField::modulo(&p, &Integers);
        prop_assert_eq!(built.is_ok(), is_prime(p));
        if let Ok(field) = built {
            prop_assert_eq!(field.len(), p as usize);
        }
    }
}

#[test]
fn prime_oracle() {
    let primes: Vec<i64> = (0..30).filter(|&n| is_prime(n)).collect();
    assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}

// ===== Discrete logarithms =====

proptest! {
    #[test]
    fn powermod_matches_naive(g in 0i64..50, n in 0u64..10, p in 2i64..1000) {
        let naive = Integers.pow(&g, n).rem_euclid(p);
        prop_assert_eq!(powermod(&g, n, &p, &Integers).unwrap(), naive);
    }
}

proptest! {
    #[test]
    fn solvers_agree(
        p in prop::sample::select(vec![23i64, 101, 149, 401, 1009]),
        g in 2i64..23,
        n in 0u64..1000
    ) {
        let target = powermod(&g, n, &p, &Integers).unwrap();

        let brute = BruteForce::new(g, target, p, &Integers).solve().unwrap();
        prop_assert_eq!(powermod(&g, brute, &p, &Integers).unwrap(), target);

        let bsgs = BabyStepGiantStep::new(g, target, p, &Integers)
            .unwrap()
            .solve()
            .unwrap();
        prop_assert_eq!(powermod(&g, bsgs, &p, &Integers).unwrap(), target);
    }
}
