//! Discrete logarithms: given `g`, `G` and `p`, find `n` with `g^n = G (mod p)`.

pub mod basics;
pub mod solvers;

pub use basics::{bits, powermod, Bits};
pub use solvers::{BabyStepGiantStep, BruteForce, DlpProblem, DlpSolver};
