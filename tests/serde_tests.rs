//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use galoiskit::{
    extended_euclid, Bezout, CheckReport, Field, FieldLaw, FiniteField, Integers, Poly,
    PolynomialField, Reals,
};

#[test]
fn poly_roundtrip() {
    // X^2 + 2, stored lowest degree first
    let ring = PolynomialField::new("X", Integers);
    let p = ring.from_coeffs([1, 0, 2]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[2,0,1]");
    let q: Poly<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_zero_roundtrip() {
    let p = Poly::<i64>::zero();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[]");
    let q: Poly<i64> = serde_json::from_str(&json).unwrap();
    assert!(q.is_zero());
}

#[test]
fn trailing_zeros_are_trimmed_on_deserialize() {
    let ring = PolynomialField::new("X", Integers);

    let one: Poly<i64> = serde_json::from_str("[1,0]").unwrap();
    assert_eq!(one, ring.one());
    assert!(ring.contains(&one));
    assert_eq!(ring.div_rem(&ring.x(), &one), Ok((ring.x(), ring.zero())));

    let zero: Poly<i64> = serde_json::from_str("[0,0,0]").unwrap();
    assert!(zero.is_zero());
    assert_eq!(zero.degree(), None);

    let p: Poly<i64> = serde_json::from_str("[2,0,1,0,0]").unwrap();
    assert_eq!(p, ring.from_coeffs([1, 0, 2]));
    assert_eq!(serde_json::to_string(&p).unwrap(), "[2,0,1]");
}

#[test]
fn real_poly_is_trimmed_on_deserialize() {
    let ring = PolynomialField::new("X", Reals);
    let p: Poly<f64> = serde_json::from_str("[0.5,-1.5,0.0]").unwrap();
    assert_eq!(p, ring.from_coeffs([-1.5, 0.5]));
    assert!(ring.contains(&p));
}

#[test]
fn field_law_roundtrip() {
    for law in FieldLaw::ALL {
        let json = serde_json::to_string(&law).unwrap();
        let back: FieldLaw = serde_json::from_str(&json).unwrap();
        assert_eq!(law, back);
    }
    assert_eq!(
        serde_json::to_string(&FieldLaw::Distributive).unwrap(),
        "\"Distributive\""
    );
}

#[test]
fn check_report_roundtrip() {
    let gf5 = FiniteField::modulo(&5, &Integers).unwrap();
    let mut tables = gf5.tables();
    tables.mul.insert((2, 3), 4);
    tables.mul.insert((3, 2), 4);
    let broken = FiniteField::new(gf5.elements().to_vec(), 0, 1, tables).unwrap();

    let report = broken.check_report();
    assert!(!report.is_ok());
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("failed"));
    let back: CheckReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);

    let ok = serde_json::to_string(&gf5.check_report()).unwrap();
    assert_eq!(ok, r#"{"failed":[]}"#);
}

#[test]
fn bezout_roundtrip() {
    let r = extended_euclid(&Integers, &240, &46).unwrap();
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"gcd\":2"));
    let back: Bezout<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(r, back);
}
