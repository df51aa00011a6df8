use crate::error::MichigradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::check_same_graph;
use crate::value::Value;

/// Subtraction, built as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Result<Value, MichigradError> {
    check_same_graph("sub", a, b)?;
    a.try_data()?;
    let neg_b = neg_op(b)?;
    add_op(a, &neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
