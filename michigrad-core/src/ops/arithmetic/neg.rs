use crate::error::MichigradError;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negation, built as `a * -1`.
pub fn neg_op(a: &Value) -> Result<Value, MichigradError> {
    a.try_data()?;
    let minus_one = a.graph().value(-1.0);
    mul_op(a, &minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
