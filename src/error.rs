use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DisjointSetError {
    #[error("Element {index} is out of range for a forest of {len} elements")]
    OutOfRange { index: usize, len: usize },

    #[error("Collation needs {expected} payloads, but the input ran out after {actual}")]
    InsufficientInput { expected: usize, actual: usize },
}

pub type Result<T, E = DisjointSetError> = core::result::Result<T, E>;
