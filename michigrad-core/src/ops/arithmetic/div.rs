use crate::error::MichigradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::check_same_graph;
use crate::value::Value;

/// Division, built as `a * b^-1`.
///
/// Dividing by zero is not an error: the result is an IEEE infinity or NaN.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, MichigradError> {
    check_same_graph("div", a, b)?;
    a.try_data()?;
    let recip_b = pow_op(b, -1.0)?;
    mul_op(a, &recip_b)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
