use thiserror::Error;

/// A grammar or matrix that cannot be closed. Raised before any
/// propagation starts; no partial output is ever produced alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("rule for `{lhs}` has a right-hand side of length {len}, expected 1 or 2")]
    MalformedRule { lhs: String, len: usize },

    #[error("rule for `{lhs}` uses an empty symbol name")]
    EmptySymbol { lhs: String },

    #[error("matrix row {row} has {len} cells but the matrix has {expected} rows")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("vertex {vertex} is out of range for a matrix of size {size}")]
    VertexOutOfRange { vertex: usize, size: usize },
}
