use crate::autograd::backward_op::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;

/// Raises `base` to a constant `exponent`.
///
/// d/dx x^k = k * x^(k-1). A zero base with a negative exponent yields
/// infinities, which propagate as is.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, MichigradError> {
    let base_value = base.try_data()?;
    let op = BackwardOp::Pow {
        base: base.id(),
        base_value,
        exponent,
    };
    Ok(base.graph().push(base_value.powf(exponent), op))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
