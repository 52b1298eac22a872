//! Error types shared across the crate.

use thiserror::Error;

/// All failures surfaced by this crate.
///
/// Every variant is terminal for the operation that raised it: the
/// orthogonalizer never hands back a partially processed set, and the file
/// reader never hands back a partially parsed one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Vectors in a set, or the two operands of an inner product, do not
    /// share a common length.
    #[error("dimension mismatch: expected {expected} entries, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A Gram-Schmidt residual has (near-)zero squared norm, so it can
    /// neither serve as a projection basis nor be normalized. Produced by
    /// linearly dependent input or an explicit zero vector.
    #[error("degenerate basis: vector {index} has zero squared norm")]
    DegenerateBasis { index: usize },

    /// A textual entry is neither a real nor a complex numeric literal.
    #[error("line {line}: cannot parse '{text}' as a real or complex entry")]
    UnparseableEntry { text: String, line: usize },

    /// Underlying file I/O failure, stringified so the error stays `Clone`.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
