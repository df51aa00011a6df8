use crate::autograd::backward_op::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `max(0, x)`.
///
/// The gradient flows only when `x > 0`; at exactly zero it is blocked.
pub fn relu_op(input: &Value) -> Result<Value, MichigradError> {
    let x = input.try_data()?;
    let active = x > 0.0;
    let op = BackwardOp::Relu {
        input: input.id(),
        active,
    };
    Ok(input.graph().push(if active { x } else { 0.0 }, op))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
