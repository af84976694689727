//! Discrete Logarithms
//!
//! This example demonstrates:
//! - Fast modular exponentiation with `powermod`
//! - Solving `g^n = G (mod p)` by brute force and baby-step-giant-step
//! - The same solvers over a polynomial modulus
//!
//! Run with: RUST_LOG=debug cargo run --example discrete_log

use galoiskit::{
    bits, powermod, BabyStepGiantStep, BruteForce, DlpSolver, FiniteField, Integers,
    PolynomialField,
};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Discrete Logarithms ===\n");

    exponentiation();
    integer_logs();
    polynomial_logs();
}

fn exponentiation() {
    println!("--- powermod ---\n");

    let n = 221;
    println!("{n} = {:?}", bits(n).collect::<Vec<_>>());
    println!("113^{n} mod 310 = {}\n", powermod(&113, n, &310, &Integers).unwrap());
}

fn integer_logs() {
    println!("--- Integers ---\n");

    for (g, n, p) in [(113i64, 221u64, 310i64), (1, 1, 5), (12, 23, 34), (11, 101, 149)] {
        let target = powermod(&g, n, &p, &Integers).unwrap();
        let brute = BruteForce::new(g, target, p, &Integers).solve().unwrap();
        print!("{g}^n = {target} (mod {p}): brute force n = {brute}");

        match BabyStepGiantStep::new(g, target, p, &Integers) {
            Ok(solver) => println!(", bsgs n = {}", solver.solve().unwrap()),
            Err(err) => println!(", bsgs: {err}"),
        }
    }
    println!();
}

fn polynomial_logs() {
    println!("--- GF(2)[X] mod X^4 + X + 1 ---\n");

    let f2 = FiniteField::modulo(&2, &Integers).unwrap();
    let ring = PolynomialField::new("X", f2);
    let modulus = ring.from_coeffs([1, 0, 0, 1, 1]);

    for n in [3u64, 7, 11, 14] {
        let target = powermod(&ring.x(), n, &modulus, &ring).unwrap();
        let solver = BabyStepGiantStep::new(ring.x(), target.clone(), modulus.clone(), &ring)
            .unwrap();
        println!(
            "X^n = {}: n = {}",
            ring.format(&target),
            solver.solve().unwrap()
        );
    }
}
