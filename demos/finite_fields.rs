//! Finite Fields
//!
//! This example demonstrates:
//! - Building GF(p) from the integers and a prime modulus
//! - Printing the addition and multiplication tables
//! - Building extension fields from irreducible polynomials
//! - Checking the field laws, including on a corrupted table
//!
//! Run with: RUST_LOG=debug cargo run --example finite_fields

use galoiskit::{
    extended_euclid_steps, Field, FieldCache, FiniteField, Integers, PolynomialField,
};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Finite Fields ===\n");

    euclid_trace();
    prime_field();
    extension_fields();
    broken_field();
}

/// Show every row of the extended Euclidean algorithm
fn euclid_trace() {
    println!("--- Extended Euclid ---\n");

    let (bezout, steps) = extended_euclid_steps(&Integers, &240, &46).unwrap();
    println!("{:>6} {:>6} {:>6}", "r", "s", "t");
    for step in &steps {
        println!("{:>6} {:>6} {:>6}", step.remainder, step.s, step.t);
    }
    println!(
        "gcd(240, 46) = {} = {}*240 + {}*46\n",
        bezout.gcd, bezout.s, bezout.t
    );
}

fn print_table(field: &FiniteField<i64>, name: &str, op: impl Fn(&i64, &i64) -> i64) {
    print!("{name:>3} |");
    for b in field.iter() {
        print!("{b:>3}");
    }
    println!();
    println!("{}", "-".repeat(5 + 3 * field.len()));
    for a in field.iter() {
        print!("{a:>3} |");
        for b in field.iter() {
            print!("{:>3}", op(a, b));
        }
        println!();
    }
    println!();
}

fn prime_field() {
    println!("--- GF(5) ---\n");

    let gf5 = FiniteField::modulo(&5, &Integers).unwrap();
    print_table(&gf5, "+", |a, b| gf5.add(a, b));
    print_table(&gf5, "*", |a, b| gf5.mul(a, b));

    for a in gf5.iter().skip(1) {
        println!("{a}^-1 = {}", gf5.inv(a).unwrap());
    }
    println!("generators: {:?}", gf5.mul_generators());
    println!("field laws: {}\n", gf5.check_report());

    match FiniteField::modulo(&6, &Integers) {
        Ok(_) => println!("GF(6) unexpectedly exists"),
        Err(err) => println!("modulo 6: {err}\n"),
    }
}

fn extension_fields() {
    println!("--- Extension Fields ---\n");

    let ring = PolynomialField::new("X", Integers);
    let mut cache = FieldCache::new(Integers);

    // X^2 + X + 1, X^3 + X + 1 and X^4 + X + 1 are irreducible over GF(2)
    for coeffs in [vec![1, 1, 1], vec![1, 0, 1, 1], vec![1, 0, 0, 1, 1]] {
        let poly = ring.from_coeffs(coeffs);
        let field = cache.modulo_poly(&2, &poly).unwrap();
        println!(
            "GF(2)[X] / ({}) = {}: laws hold = {}, {} generators",
            ring.format(&poly),
            field,
            field.check(),
            field.mul_generators().len()
        );
    }

    let gf9 = cache
        .modulo_poly(&3, &ring.from_coeffs([1, 0, 1]))
        .unwrap();
    let base = PolynomialField::new("X", FiniteField::modulo(&3, &Integers).unwrap());
    println!("\nelements of {gf9} modulo X^2 + 1:");
    for e in gf9.iter() {
        println!("  {}", base.format(e));
    }

    match cache.modulo_poly(&2, &ring.from_coeffs([1, 0, 1])) {
        Ok(_) => println!("X^2 + 1 unexpectedly irreducible over GF(2)"),
        Err(err) => println!("\nX^2 + 1 over GF(2): {err}"),
    }
    println!("cached fields: {}\n", cache.len());
}

/// Corrupt one entry of a valid table and watch the law check fail
fn broken_field() {
    println!("--- Law Check ---\n");

    let gf7 = FiniteField::modulo(&7, &Integers).unwrap();
    let mut tables = gf7.tables();
    tables.add.insert((3, 4), 1);
    let broken = FiniteField::new(gf7.elements().to_vec(), 0, 1, tables).unwrap();
    println!("GF(7) with 3 + 4 = 1: {}", broken.check_report());
}
