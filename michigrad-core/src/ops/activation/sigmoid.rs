use crate::autograd::backward_op::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;

/// Logistic sigmoid `1 / (1 + e^-x)`. The output is captured for the
/// `s * (1 - s)` rule.
///
/// Computed naively: `exp` overflows to infinity for very negative inputs and
/// the result is then exactly 0.
pub fn sigmoid_op(input: &Value) -> Result<Value, MichigradError> {
    let x = input.try_data()?;
    let output = 1.0 / (1.0 + (-x).exp());
    let op = BackwardOp::Sigmoid {
        input: input.id(),
        output,
    };
    Ok(input.graph().push(output, op))
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
