use crate::autograd::backward_op::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;

/// Hyperbolic tangent. The output is captured for the `1 - t^2` rule.
pub fn tanh_op(input: &Value) -> Result<Value, MichigradError> {
    let output = input.try_data()?.tanh();
    let op = BackwardOp::Tanh {
        input: input.id(),
        output,
    };
    Ok(input.graph().push(output, op))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
