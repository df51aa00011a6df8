use crate::autograd::backward_op::BackwardOp;
use crate::error::MichigradError;
use crate::ops::check_same_graph;
use crate::value::Value;

/// Multiplies two values: `a * b`.
///
/// Both operand values are captured now, so later `set_data` calls on the
/// operands do not change the gradients of this node.
pub fn mul_op(a: &Value, b: &Value) -> Result<Value, MichigradError> {
    check_same_graph("mul", a, b)?;
    let lhs_value = a.try_data()?;
    let rhs_value = b.try_data()?;
    let op = BackwardOp::Mul {
        lhs: a.id(),
        rhs: b.id(),
        lhs_value,
        rhs_value,
    };
    Ok(a.graph().push(lhs_value * rhs_value, op))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
