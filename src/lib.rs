//! # ortho_engine Quickstart
//!
//! ```rust
//! use ortho_engine::prelude::*;
//!
//! // Orthonormalize a 3-vector basis, rounded to 3 decimal places.
//! let basis = vec![
//!     Vector::from_reals(&[1.0, 2.0, 0.0]),
//!     Vector::from_reals(&[8.0, 1.0, 6.0]),
//!     Vector::from_reals(&[0.0, 0.0, 1.0]),
//! ];
//! let ortho = orthogonalize_vectors(basis, &OrthoParams::default()).unwrap();
//!
//! assert_eq!(ortho[0], Vector::from_reals(&[0.447, 0.894, 0.0]));
//! assert_eq!(ortho.len(), 3);
//! ```
//!
//! Complex vectors go through the same pipeline; the inner product is the
//! Hermitian form, conjugating its first argument:
//!
//! ```rust
//! use ortho_engine::prelude::*;
//!
//! let a = Vector::new(vec![Scalar::new(1.0, 1.0), Scalar::new(2.0, -1.0)]);
//! let b = Vector::new(vec![Scalar::new(3.0, -2.0), Scalar::new(1.0, 1.0)]);
//! assert_eq!(a.dot(&b).unwrap(), Scalar::new(2.0, -2.0));
//! ```
#![doc = include_str!("../README.md")]

// Core modules
pub mod error;
pub mod gram_schmidt;
pub mod io;
pub mod prelude;
pub mod scalar;
pub mod vector;
pub mod vector_set;

// --- Public API exports ---
pub use error::{Error, Result};
pub use gram_schmidt::{orthogonalize, orthogonalize_vectors, OrthoParams, DEGENERATE_EPS};
pub use io::{parse_vector_set_literal, read_vector_set, write_vector_set};
pub use scalar::{Domain, Scalar};
pub use vector::Vector;
pub use vector_set::{OrthogonalSet, VectorSet};
