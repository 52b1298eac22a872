//! Validated vector sets and the orthogonal sets produced from them.

use std::fmt;
use std::ops::Index;
use std::slice;

use crate::error::{Error, Result};
use crate::scalar::Domain;
use crate::vector::Vector;

/// An ordered collection of vectors sharing one dimension.
///
/// The dimension check runs in the constructor, so holding a `VectorSet` is
/// proof the collection is well-formed. The orthogonalizer takes one of
/// these instead of a raw `Vec<Vector>` for exactly that reason.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSet {
    vectors: Vec<Vector>,
    domain: Domain,
}

impl VectorSet {
    /// Validate that every vector has the first vector's dimension. The
    /// empty set is valid and orthogonalizes to the empty set.
    pub fn new(vectors: Vec<Vector>) -> Result<Self> {
        if let Some(first) = vectors.first() {
            let expected = first.dim();
            for v in &vectors[1..] {
                if v.dim() != expected {
                    return Err(Error::DimensionMismatch { expected, got: v.dim() });
                }
            }
        }
        let domain = vectors
            .iter()
            .map(Vector::domain)
            .fold(Domain::Real, Domain::union);
        Ok(Self { vectors, domain })
    }

    /// Shape as `(count, dimension)`. `(0, 0)` for the empty set.
    pub fn dimensions(&self) -> (usize, usize) {
        let dim = self.vectors.first().map_or(0, Vector::dim);
        (self.vectors.len(), dim)
    }

    /// `Complex` as soon as any member vector is complex.
    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    pub fn iter(&self) -> slice::Iter<'_, Vector> {
        self.vectors.iter()
    }
}

impl Index<usize> for VectorSet {
    type Output = Vector;

    fn index(&self, index: usize) -> &Vector {
        &self.vectors[index]
    }
}

/// Output of the orthogonalizer: same cardinality and dimension as the
/// input set, in the input's order, pairwise orthogonal (unit length when
/// normalization was requested).
#[derive(Debug, Clone, PartialEq)]
pub struct OrthogonalSet {
    vectors: Vec<Vector>,
}

impl OrthogonalSet {
    pub(crate) fn new(vectors: Vec<Vector>) -> Self {
        Self { vectors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    pub fn iter(&self) -> slice::Iter<'_, Vector> {
        self.vectors.iter()
    }

    pub fn into_vec(self) -> Vec<Vector> {
        self.vectors
    }

    /// Every pairwise inner product stays within `tolerance` of zero, in
    /// both components.
    pub fn is_orthogonal(&self, tolerance: f64) -> bool {
        for i in 0..self.vectors.len() {
            for j in 0..i {
                match self.vectors[i].dot(&self.vectors[j]) {
                    Ok(d) if d.re.abs() <= tolerance && d.im.abs() <= tolerance => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// [`OrthogonalSet::is_orthogonal`] plus unit squared norm on every
    /// vector, within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        self.is_orthogonal(tolerance)
            && self
                .vectors
                .iter()
                .all(|v| (v.squared_norm() - 1.0).abs() <= tolerance)
    }
}

impl Index<usize> for OrthogonalSet {
    type Output = Vector;

    fn index(&self, index: usize) -> &Vector {
        &self.vectors[index]
    }
}

impl fmt::Display for OrthogonalSet {
    /// One vector per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.vectors {
            writeln!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Scalar;

    #[test]
    fn uniform_dimensions_are_accepted() {
        let set = VectorSet::new(vec![
            Vector::from_reals(&[1.0, 2.0, 0.0]),
            Vector::from_reals(&[8.0, 1.0, 6.0]),
        ])
        .unwrap();
        assert_eq!(set.dimensions(), (2, 3));
        assert_eq!(set.domain(), Domain::Real);
    }

    #[test]
    fn ragged_dimensions_are_rejected() {
        let err = VectorSet::new(vec![
            Vector::from_reals(&[1.0, 2.0]),
            Vector::from_reals(&[1.0, 2.0, 3.0]),
        ])
        .unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 2, got: 3 });
    }

    #[test]
    fn one_complex_member_makes_the_set_complex() {
        let set = VectorSet::new(vec![
            Vector::from_reals(&[1.0, 0.0]),
            Vector::new(vec![Scalar::real(0.0), Scalar::new(0.0, 1.0)]),
        ])
        .unwrap();
        assert!(set.domain().is_complex());
    }

    #[test]
    fn empty_set_is_valid() {
        let set = VectorSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.dimensions(), (0, 0));
    }

    #[test]
    fn orthogonality_check_catches_skewed_pairs() {
        let good = OrthogonalSet::new(vec![
            Vector::from_reals(&[1.0, 0.0]),
            Vector::from_reals(&[0.0, 2.0]),
        ]);
        assert!(good.is_orthogonal(1e-9));
        assert!(!good.is_orthonormal(1e-9));

        let skewed = OrthogonalSet::new(vec![
            Vector::from_reals(&[1.0, 0.0]),
            Vector::from_reals(&[0.1, 2.0]),
        ]);
        assert!(!skewed.is_orthogonal(1e-9));
    }
}
