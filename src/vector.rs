//! Dimension-agnostic real/complex vectors and their inner-product algebra.

use std::fmt;
use std::ops::{Add, Sub};

use num_traits::Zero;

use crate::error::{Error, Result};
use crate::scalar::{Domain, Scalar};

/// An ordered, fixed-length sequence of [`Scalar`] entries tagged with the
/// numeric [`Domain`] decided at construction.
///
/// Vectors are value objects: rounding, normalization and promotion all
/// produce a fresh vector instead of mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    entries: Vec<Scalar>,
    domain: Domain,
}

impl Vector {
    /// Build a vector, classifying it `Complex` iff any entry carries a
    /// nonzero imaginary part.
    pub fn new(entries: Vec<Scalar>) -> Self {
        let domain = if entries.iter().any(|e| e.im != 0.0) {
            Domain::Complex
        } else {
            Domain::Real
        };
        Self { entries, domain }
    }

    /// Build a purely real vector from raw components.
    pub fn from_reals(values: &[f64]) -> Self {
        Self {
            entries: values.iter().map(|&re| Scalar::real(re)).collect(),
            domain: Domain::Real,
        }
    }

    /// The zero vector of the given dimension and domain.
    pub fn zero(dim: usize, domain: Domain) -> Self {
        Self { entries: vec![Scalar::zero(); dim], domain }
    }

    /// Re-tag as complex. Entry values are untouched; a vector that is
    /// already complex comes back unchanged. There is no demotion.
    pub fn promote(mut self) -> Self {
        self.domain = Domain::Complex;
        self
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub fn is_complex(&self) -> bool {
        self.domain.is_complex()
    }

    #[inline]
    pub fn entries(&self) -> &[Scalar] {
        &self.entries
    }

    /// `Σ (re² + im²)` over all entries. Always a non-negative real, equal
    /// to the ordinary squared Euclidean norm for real vectors.
    pub fn squared_norm(&self) -> f64 {
        let mut sum = 0.0;
        for e in &self.entries {
            sum += e.re * e.re;
            sum += e.im * e.im;
        }
        sum
    }

    /// Inner product with `other`.
    ///
    /// Real with real is the ordinary dot product. As soon as either operand
    /// is complex the Hermitian form `Σ conj(aᵢ)·bᵢ` applies, conjugating
    /// the entries of `self`. Swapping the arguments conjugates the result,
    /// so the argument order is part of the contract.
    pub fn dot(&self, other: &Vector) -> Result<Scalar> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch { expected: self.dim(), got: other.dim() });
        }
        match self.domain.union(other.domain) {
            Domain::Real => {
                let sum: f64 = self
                    .entries
                    .iter()
                    .zip(&other.entries)
                    .map(|(a, b)| a.re * b.re)
                    .sum();
                Ok(Scalar::real(sum))
            }
            Domain::Complex => {
                let mut sum = Scalar::zero();
                for (a, b) in self.entries.iter().zip(&other.entries) {
                    sum = sum + a.conj() * *b;
                }
                Ok(sum)
            }
        }
    }

    /// The component of `self` along `axis`:
    /// `(⟨axis, self⟩ / ‖axis‖²) · axis`.
    ///
    /// The coefficient conjugates the axis, not `self`, following the
    /// Hermitian convention of [`Vector::dot`]. An axis with zero squared
    /// norm is the caller's degenerate-basis condition, not handled here.
    pub fn project_onto(&self, axis: &Vector) -> Result<Vector> {
        let coeff = axis.dot(self)?.div_real(axis.squared_norm());
        Ok(axis.scaled(coeff))
    }

    /// Entry-wise multiplication by a (possibly complex) coefficient.
    pub fn scaled(&self, coeff: Scalar) -> Vector {
        let domain = if coeff.im != 0.0 { Domain::Complex } else { self.domain };
        Vector {
            entries: self.entries.iter().map(|&e| e * coeff).collect(),
            domain,
        }
    }

    /// Entry-wise multiplication by a real factor.
    pub fn scale(&self, factor: f64) -> Vector {
        Vector {
            entries: self.entries.iter().map(|e| e.scale(factor)).collect(),
            domain: self.domain,
        }
    }

    /// Scale to unit Euclidean length. The caller must ensure the norm is
    /// nonzero; the orthogonalizer screens for that before normalizing.
    pub fn normalized(&self) -> Vector {
        let norm = self.squared_norm().sqrt();
        Vector {
            entries: self.entries.iter().map(|e| e.div_real(norm)).collect(),
            domain: self.domain,
        }
    }

    /// Round every entry's components to `places` decimal places. The domain
    /// tag is preserved: a complex vector keeps explicit imaginary parts
    /// even when they all round to zero.
    pub fn rounded(&self, places: u32) -> Vector {
        Vector {
            entries: self.entries.iter().map(|e| e.rounded(places)).collect(),
            domain: self.domain,
        }
    }

    /// Final output shaping: normalize first if requested, then round if a
    /// precision is given. The order is fixed, so rounding always applies to
    /// the normalized entries.
    pub fn alter(&self, normalize: bool, precision: Option<u32>) -> Vector {
        let mut out = if normalize { self.normalized() } else { self.clone() };
        if let Some(places) = precision {
            out = out.rounded(places);
        }
        out
    }

    /// Join all entries with `delimiter`, rendered under the vector's domain
    /// tag. No trailing delimiter.
    pub fn to_delimited(&self, delimiter: char) -> String {
        let parts: Vec<String> = self.entries.iter().map(|e| e.render(self.domain)).collect();
        parts.join(&delimiter.to_string())
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        assert_eq!(self.dim(), rhs.dim(), "vector addition requires equal dimensions");
        let domain = self.domain.union(rhs.domain);
        let entries = self
            .entries
            .iter()
            .zip(&rhs.entries)
            .map(|(&a, &b)| a + b)
            .collect();
        Vector { entries, domain }
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        assert_eq!(self.dim(), rhs.dim(), "vector subtraction requires equal dimensions");
        let domain = self.domain.union(rhs.domain);
        let entries = self
            .entries
            .iter()
            .zip(&rhs.entries)
            .map(|(&a, &b)| a - b)
            .collect();
        Vector { entries, domain }
    }
}

impl fmt::Display for Vector {
    /// `[0.447, 0.894, 0]` for real vectors, `[0.5+0i, 0+0.707i]` for
    /// complex ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e.render(self.domain))?;
        }
        write!(f, "]")
    }
}
