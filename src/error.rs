//! Errors reported by solvers and their node lists.

use crate::basis::Basis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SplineError {
    #[error("{basis} path requires at least {required} nodes, found {found}")]
    TooFewNodes {
        basis: Basis,
        required: usize,
        found: usize,
    },
    #[error("{basis} path requires exactly {required} nodes, found {found}")]
    WrongNodeCount {
        basis: Basis,
        required: usize,
        found: usize,
    },
    /// The lookup table is missing or was built from an older node list.
    #[error("path must be rebuilt after its nodes changed")]
    StaleTable,
    #[error("path is already closed")]
    AlreadyClosed,
    #[error("cannot close a path around a zero-length segment")]
    DegenerateSegment,
    #[error("path parameter is NaN")]
    NonFiniteParameter,
    #[error("{nodes} nodes with {subdivisions} subdivisions each overflow the lookup table")]
    TableTooLarge { nodes: usize, subdivisions: usize },
    #[error("node index {index} is out of bounds for {len} nodes")]
    IndexOutOfBounds { index: usize, len: usize },
}
