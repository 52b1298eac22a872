//! Glob-import surface for the common types and entry points:
//! `use ortho_engine::prelude::*;`

pub use crate::error::{Error, Result};
pub use crate::gram_schmidt::{orthogonalize, orthogonalize_vectors, OrthoParams, DEGENERATE_EPS};
pub use crate::io::{parse_vector_set_literal, read_vector_set, write_vector_set};
pub use crate::scalar::{Domain, Scalar};
pub use crate::vector::Vector;
pub use crate::vector_set::{OrthogonalSet, VectorSet};
