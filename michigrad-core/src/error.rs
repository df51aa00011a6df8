use thiserror::Error;

/// Custom error type for the michigrad engine.
///
/// Every variant is a caller error: the engine itself has no recoverable
/// failure mode. Floating point overflow and NaN are never reported here,
/// they simply propagate through `data` and `grad`.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MichigradError {
    #[error("Operands of {operation} belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Stale value: node {index} (generation {generation}) was released by a graph rewind")]
    StaleValue { index: usize, generation: u32 },

    #[error("Invalid checkpoint: cannot rewind to length {checkpoint}, graph only holds {len} nodes")]
    InvalidCheckpoint { checkpoint: usize, len: usize },

    #[error("Input size mismatch in {operation}: expected {expected}, got {actual}")]
    InputSizeMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Operation {operation} requires at least one input")]
    EmptyInput { operation: String },

    #[error("Invalid initialisation: {0}")]
    InvalidInit(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
