use core::hash::Hash;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::algebra::euclid::extended_euclid;
use crate::algebra::field::Field;
use crate::dlp::basics::powermod;
use crate::error::AlgebraError;
use crate::utils::ceil_sqrt_u64;

/// One discrete logarithm instance: find `n` with `generator^n = target (mod modulus)`.
#[derive(Debug)]
pub struct DlpProblem<'a, F: Field> {
    pub generator: F::Elem,
    pub target: F::Elem,
    pub modulus: F::Elem,
    pub field: &'a F,
}

impl<'a, F: Field> DlpProblem<'a, F> {
    pub fn new(generator: F::Elem, target: F::Elem, modulus: F::Elem, field: &'a F) -> Self {
        Self {
            generator,
            target,
            modulus,
            field,
        }
    }

    /// Check a candidate exponent with [`powermod`].
    pub fn verify(&self, n: u64) -> Result<bool, AlgebraError> {
        let lhs = powermod(&self.generator, n, &self.modulus, self.field)?;
        Ok(lhs == self.field.rem(&self.target, &self.modulus)?)
    }
}

impl<F: Field> Clone for DlpProblem<'_, F> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            target: self.target.clone(),
            modulus: self.modulus.clone(),
            field: self.field,
        }
    }
}

/// A discrete logarithm algorithm bound to one [`DlpProblem`].
pub trait DlpSolver {
    /// Return some `n` with `g^n = G (mod p)`.
    ///
    /// `n` is a plain exponent, not a field element, and is not reduced
    /// modulo `p`: exponents repeat with the order of `g`, which need not
    /// divide `p`. Baby-step-giant-step returns `i + k*m` as found, so `n`
    /// may exceed that order but always satisfies the congruence.
    fn solve(&self) -> Result<u64, AlgebraError>;
}

/// Exhaustive search over `n = 0, 1, 2, ...`.
///
/// Keeps `g^n mod p` incrementally, so each step costs one multiplication and
/// one reduction. The search does not terminate when the target is outside
/// the subgroup generated by `g`; callers must make sure it is not.
#[derive(Clone, Debug)]
pub struct BruteForce<'a, F: Field> {
    problem: DlpProblem<'a, F>,
}

impl<'a, F: Field> BruteForce<'a, F> {
    pub fn new(generator: F::Elem, target: F::Elem, modulus: F::Elem, field: &'a F) -> Self {
        Self {
            problem: DlpProblem::new(generator, target, modulus, field),
        }
    }

    pub fn problem(&self) -> &DlpProblem<'a, F> {
        &self.problem
    }
}

impl<F: Field> DlpSolver for BruteForce<'_, F> {
    fn solve(&self) -> Result<u64, AlgebraError> {
        let DlpProblem {
            generator: g,
            target,
            modulus: p,
            field,
        } = &self.problem;

        let target = field.rem(target, p)?;
        let mut power = field.rem(&field.one(), p)?;
        let mut n = 0u64;
        while power != target {
            power = field.mul_mod(&power, g, p)?;
            n += 1;
        }
        debug!(n, "brute force found logarithm");
        Ok(n)
    }
}

/// Shanks' baby-step-giant-step, O(sqrt(p)) time and memory.
///
/// Construction runs the extended Euclidean algorithm on `(g, p)`: it fails
/// when they are not coprime and otherwise keeps `g⁻¹ mod p` for the giant
/// steps.
#[derive(Clone, Debug)]
pub struct BabyStepGiantStep<'a, F: Field> {
    problem: DlpProblem<'a, F>,
    generator_inv: F::Elem,
}

impl<'a, F: Field> BabyStepGiantStep<'a, F> {
    /// # Errors
    ///
    /// [`AlgebraError::BsgsPrecondition`] when `gcd(g, p)` is not one.
    pub fn new(
        generator: F::Elem,
        target: F::Elem,
        modulus: F::Elem,
        field: &'a F,
    ) -> Result<Self, AlgebraError> {
        let bezout = extended_euclid(field, &generator, &modulus)?;
        if bezout.gcd != field.one() {
            return Err(AlgebraError::BsgsPrecondition {
                generator: format!("{generator:?}"),
                modulus: format!("{modulus:?}"),
                gcd: format!("{:?}", bezout.gcd),
            });
        }
        let generator_inv = field.rem(&bezout.s, &modulus)?;

        Ok(Self {
            problem: DlpProblem::new(generator, target, modulus, field),
            generator_inv,
        })
    }

    pub fn problem(&self) -> &DlpProblem<'a, F> {
        &self.problem
    }

    /// `g⁻¹ mod p`.
    pub fn generator_inv(&self) -> &F::Elem {
        &self.generator_inv
    }
}

impl<F> DlpSolver for BabyStepGiantStep<'_, F>
where
    F: Field,
    F::Elem: Eq + Hash,
{
    /// # Errors
    ///
    /// [`AlgebraError::Unsupported`] when the number of residues modulo `p`
    /// is unknown, [`AlgebraError::NoSolution`] when the target is not a
    /// power of `g`.
    fn solve(&self) -> Result<u64, AlgebraError> {
        let DlpProblem {
            generator: g,
            target,
            modulus: p,
            field,
        } = &self.problem;

        let residues = field
            .residue_count(p)
            .ok_or_else(|| AlgebraError::Unsupported {
                op: "baby-step-giant-step",
                field: field.to_string(),
            })?;
        let m = ceil_sqrt_u64(residues);
        debug!(residues, m, "baby-step-giant-step");

        // g^i mod p -> smallest such i
        let mut baby_steps: HashMap<F::Elem, u64> = HashMap::new();
        let mut power = field.rem(&field.one(), p)?;
        for i in 0..m {
            baby_steps.entry(power.clone()).or_insert(i);
            power = field.mul_mod(&power, g, p)?;
        }

        // g^(-m) mod p
        let factor = powermod(&self.generator_inv, m, p, *field)?;

        let mut y = field.rem(target, p)?;
        for k in 0..m {
            if let Some(&i) = baby_steps.get(&y) {
                let n = i + k * m;
                debug!(n, giant_steps = k, "baby-step-giant-step found logarithm");
                return Ok(n);
            }
            trace!(k, ?y, "giant step");
            y = field.mul_mod(&y, &factor, p)?;
        }

        Err(AlgebraError::NoSolution { steps: m })
    }
}
