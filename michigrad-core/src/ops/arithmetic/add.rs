use crate::autograd::backward_op::BackwardOp;
use crate::error::MichigradError;
use crate::ops::check_same_graph;
use crate::value::Value;

/// Adds two values: `a + b`.
///
/// The backward rule passes the incoming gradient unchanged to both operands.
///
/// # Errors
/// `GraphMismatch` if the operands live in different graphs, `StaleValue` if
/// either was released by a rewind.
pub fn add_op(a: &Value, b: &Value) -> Result<Value, MichigradError> {
    check_same_graph("add", a, b)?;
    let data = a.try_data()? + b.try_data()?;
    let op = BackwardOp::Add {
        lhs: a.id(),
        rhs: b.id(),
    };
    Ok(a.graph().push(data, op))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
