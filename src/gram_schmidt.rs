//! Classical Gram-Schmidt orthogonalization.
//!
//! Given an ordered set `[v₀, …, vₙ₋₁]` of same-length vectors, produce
//! `[u₀, …, uₙ₋₁]` spanning the same subspace with `⟨uᵢ, uⱼ⟩ = 0` for
//! `i ≠ j`:
//!
//! ```text
//! u₀ = v₀
//! uᵢ = vᵢ − Σ_{j<i} (⟨uⱼ, vᵢ⟩ / ‖uⱼ‖²) · uⱼ
//! ```
//!
//! This is the textbook projection-subtraction form, not the modified
//! (numerically stabilized) variant: a linearly dependent input leaves a
//! residual that vanishes relative to its input vector, which is reported
//! as [`Error::DegenerateBasis`] instead of being silently carried forward.
//!
//! The accumulation loop is inherently sequential, since `uᵢ` depends on
//! every earlier `uⱼ`. The finishing pass (normalize, round) is per-vector
//! independent and runs on the rayon pool.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::scalar::Domain;
use crate::vector::Vector;
use crate::vector_set::{OrthogonalSet, VectorSet};

/// Degeneracy threshold, relative to the input vector: a residual whose
/// squared norm falls below this fraction of its source vector's squared
/// norm carries no direction of its own and cannot serve as a basis vector
/// or be normalized.
pub const DEGENERATE_EPS: f64 = 1e-12;

/// Settings for one orthogonalization run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoParams {
    /// Normalize every output vector to unit length.
    pub normalize: bool,
    /// Decimal places for the final rounding pass. `None` leaves entries
    /// unrounded; `Some(0)` rounds to whole numbers.
    pub precision: Option<u32>,
}

impl Default for OrthoParams {
    /// Orthonormal output rounded to 3 decimal places.
    fn default() -> Self {
        Self { normalize: true, precision: Some(3) }
    }
}

impl OrthoParams {
    /// Raw orthogonal residuals: no normalization, no rounding.
    pub fn raw() -> Self {
        Self { normalize: false, precision: None }
    }

    fn wants_finish(&self) -> bool {
        self.normalize || self.precision.is_some()
    }
}

/// Orthogonalize a validated set.
///
/// The output preserves the input's order and cardinality. When the set's
/// domain is complex, every vector is promoted before accumulation so mixed
/// sets never drop imaginary parts mid-computation.
pub fn orthogonalize(set: &VectorSet, params: &OrthoParams) -> Result<OrthogonalSet> {
    let (count, dim) = set.dimensions();
    let domain = set.domain();

    let mut basis: Vec<Vector> = Vec::with_capacity(count);
    for (i, v) in set.iter().enumerate() {
        let v = match domain {
            Domain::Complex => v.clone().promote(),
            Domain::Real => v.clone(),
        };
        // Degeneracy is judged against the input's own magnitude; the floor
        // keeps an exact zero vector from slipping through.
        let scale = v.squared_norm().max(f64::MIN_POSITIVE);

        let mut subtract = Vector::zero(dim, domain);
        for u in &basis {
            subtract = subtract + v.project_onto(u)?;
        }
        let residual = v - subtract;

        if residual.squared_norm() < DEGENERATE_EPS * scale {
            return Err(Error::DegenerateBasis { index: i });
        }
        basis.push(residual);
    }

    if params.wants_finish() {
        let normalize = params.normalize;
        let precision = params.precision;
        basis = basis
            .into_par_iter()
            .map(|u| u.alter(normalize, precision))
            .collect();
    }

    Ok(OrthogonalSet::new(basis))
}

/// Validate a raw collection and orthogonalize it in one call.
pub fn orthogonalize_vectors(vectors: Vec<Vector>, params: &OrthoParams) -> Result<OrthogonalSet> {
    let set = VectorSet::new(vectors)?;
    orthogonalize(&set, params)
}
