//! Error types for the algokit library.

use thiserror::Error;

/// All errors that can occur in the algokit library.
#[derive(Error, Debug)]
pub enum AlgoError {
    /// A node handle that does not refer to a live node of this list.
    #[error("Node handle {0} does not refer to a live node")]
    InvalidNode(usize),

    /// A list operation string that could not be parsed.
    #[error("Invalid list operation: {0:?}")]
    InvalidListOp(String),

    /// An edge specification that could not be parsed.
    #[error("Invalid edge spec (expected \"u:v\"): {0:?}")]
    InvalidEdge(String),
}

/// Convenience result type for algokit operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
