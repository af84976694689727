use core::hash::Hash;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use crate::algebra::field::Field;
use crate::error::AlgebraError;
use crate::structures::finite::FiniteField;
use crate::structures::poly::Poly;

/// Memoized finite field construction over one base field.
///
/// Constructed fields are shared through `Rc`, so repeated requests for the
/// same modulus cost a hash lookup.
/// Entries are never evicted; they live as long as the cache. Failed
/// constructions are not cached.
///
/// # Example
///
/// ```
/// use galoiskit::{FieldCache, Integers};
/// use std::rc::Rc;
///
/// let mut cache = FieldCache::new(Integers);
/// let a = cache.modulo(&7).unwrap();
/// let b = cache.modulo(&7).unwrap();
/// assert!(Rc::ptr_eq(&a, &b));
/// ```
pub struct FieldCache<F: Field>
where
    F::Elem: Eq + Hash,
{
    field: F,
    prime: HashMap<F::Elem, Rc<FiniteField<F::Elem>>>,
    extension: HashMap<(F::Elem, Poly<F::Elem>), Rc<FiniteField<Poly<F::Elem>>>>,
}

impl<F: Field> FieldCache<F>
where
    F::Elem: Eq + Hash,
{
    pub fn new(field: F) -> Self {
        Self {
            field,
            prime: HashMap::new(),
            extension: HashMap::new(),
        }
    }

    /// Base field every cached field is built from.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Cached [`FiniteField::modulo`].
    pub fn modulo(&mut self, p: &F::Elem) -> Result<Rc<FiniteField<F::Elem>>, AlgebraError> {
        if let Some(hit) = self.prime.get(p) {
            trace!(modulus = ?p, "finite field cache hit");
            return Ok(Rc::clone(hit));
        }

        trace!(modulus = ?p, "finite field cache miss");
        let built = Rc::new(FiniteField::modulo(p, &self.field)?);
        self.prime.insert(p.clone(), Rc::clone(&built));
        Ok(built)
    }

    /// Cached [`FiniteField::modulo_poly`]. Reuses a cached `GF(p)`.
    pub fn modulo_poly(
        &mut self,
        p: &F::Elem,
        poly: &Poly<F::Elem>,
    ) -> Result<Rc<FiniteField<Poly<F::Elem>>>, AlgebraError> {
        let key = (p.clone(), poly.clone());
        if let Some(hit) = self.extension.get(&key) {
            trace!(modulus = ?p, ?poly, "extension field cache hit");
            return Ok(Rc::clone(hit));
        }

        trace!(modulus = ?p, ?poly, "extension field cache miss");
        let prime = self.modulo(p)?;
        let built = Rc::new(FiniteField::extend(
            (*prime).clone(),
            p,
            poly,
            &self.field,
        )?);
        self.extension.insert(key, Rc::clone(&built));
        Ok(built)
    }

    /// Number of cached fields.
    pub fn len(&self) -> usize {
        self.prime.len() + self.extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
