//! Error type shared by every field, construction and solver in the crate.

use thiserror::Error;

/// Errors raised by field arithmetic, finite field construction and the
/// discrete logarithm solvers.
///
/// Offending values are carried in their `Debug` rendering so the error stays
/// independent of the element type that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A structural invariant was violated by the caller.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Euclid's gcd of some residue and the modulus is not a unit.
    #[error("modulus {modulus} is not prime: found non-unit gcd {gcd}")]
    NonPrimeModulus { modulus: String, gcd: String },

    /// Same as [`AlgebraError::NonPrimeModulus`], for a polynomial modulus.
    #[error("polynomial {poly} is not irreducible: found non-unit gcd {gcd}")]
    NonIrreduciblePolynomial { poly: String, gcd: String },

    /// Polynomial long division left a leading term it could not eliminate.
    #[error("cannot divide {dividend} by {divisor} in {field}")]
    ExactDivision {
        dividend: String,
        divisor: String,
        field: String,
    },

    /// The element has no multiplicative inverse in the field.
    #[error("{element} has no multiplicative inverse in {field}")]
    UndefinedInverse { element: String, field: String },

    #[error("division by zero")]
    DivisionByZero,

    /// The field cannot provide the requested operation.
    #[error("{op} is not supported by {field}")]
    Unsupported { op: &'static str, field: String },

    /// Baby-step-giant-step needs a generator coprime to the modulus.
    #[error("gcd({generator}, {modulus}) = {gcd}, expected one")]
    BsgsPrecondition {
        generator: String,
        modulus: String,
        gcd: String,
    },

    /// The target is not a power of the generator.
    #[error("no discrete logarithm found after {steps} giant steps")]
    NoSolution { steps: u64 },
}
