//! # Scalar Operations Module (`ops`)
//!
//! Every operation that creates a node lives here, grouped by kind:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu, tanh, sigmoid.
//! - [`reduction`]: sum of a sequence of values.
//!
//! Each operation has a `xxx_op` function that computes the forward value,
//! captures what the derivative rule needs in a
//! [`BackwardOp`](crate::autograd::BackwardOp), and appends the node to the
//! operands' graph. The operators on [`Value`] and its activation methods are
//! thin wrappers around these functions.

pub mod activation;
pub mod arithmetic;
pub mod reduction;

use crate::error::MichigradError;
use crate::value::Value;

/// Both operands of a binary op must live in the same arena.
pub(crate) fn check_same_graph(
    operation: &str,
    a: &Value,
    b: &Value,
) -> Result<(), MichigradError> {
    if a.graph().ptr_eq(b.graph()) {
        Ok(())
    } else {
        Err(MichigradError::GraphMismatch {
            operation: operation.to_string(),
        })
    }
}
