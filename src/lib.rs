//! Runtime-constructed fields and the algorithms built on them.
//!
//! A [`Field`] is a value that performs arithmetic on its elements, so fields
//! such as `GF(p)` or `GF(p)[X] / (f)` can be created at runtime from a
//! modulus:
//!
//! ```
//! use galoiskit::{Field, FiniteField, Integers};
//!
//! let gf7 = FiniteField::modulo(&7, &Integers).unwrap();
//! assert!(gf7.check());
//! assert_eq!(gf7.inv(&3), Ok(5));
//! ```
//!
//! The [`dlp`] module solves discrete logarithms over any field with a
//! remainder operation.

pub mod algebra;
pub mod dlp;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::euclid::{extended_euclid, extended_euclid_steps, Bezout, EuclidStep};
pub use algebra::field::Field;

pub use dlp::{bits, powermod, BabyStepGiantStep, BruteForce, DlpProblem, DlpSolver};

pub use error::AlgebraError;

pub use structures::cache::FieldCache;
pub use structures::finite::{CheckReport, FieldLaw, FiniteField, OperationTables};
pub use structures::integers::Integers;
pub use structures::poly::{Poly, PolynomialField};
pub use structures::reals::Reals;

pub use utils::ceil_sqrt_u64;
