//! `std::ops` implementations for [`Value`].
//!
//! Every combination of `Value`, `&Value` and `f64` is supported in both
//! operand orders, so `2.0 - &x` and `&x / 4.0` read as expected. A constant
//! operand becomes a leaf in the graph of the `Value` operand.

use crate::error::MichigradError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Unwraps the result of an operation used through an operator.
///
/// # Panics
/// Panics with the error message when the operands belong to different
/// graphs or one of them is stale. Use the `*_op` functions to handle these
/// cases as errors.
pub(crate) fn expect_value(result: Result<Value, MichigradError>) -> Value {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

/// Creates the leaf for an `f64` operand in the graph of `value`, once
/// `value` is known to be live.
fn constant_for(value: &Value, constant: f64) -> Result<Value, MichigradError> {
    value.try_data()?;
    Ok(value.graph().value(constant))
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                expect_value($op_fn(self, rhs))
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                expect_value($op_fn(&self, &rhs))
            }
        }

        impl<'a> $trait<&'a Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &'a Value) -> Value {
                expect_value($op_fn(&self, rhs))
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                expect_value($op_fn(self, &rhs))
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                expect_value(constant_for(self, rhs).and_then(|c| $op_fn(self, &c)))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                expect_value(constant_for(&self, rhs).and_then(|c| $op_fn(&self, &c)))
            }
        }

        impl<'a> $trait<&'a Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &'a Value) -> Value {
                expect_value(constant_for(rhs, self).and_then(|c| $op_fn(&c, rhs)))
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                expect_value(constant_for(&rhs, self).and_then(|c| $op_fn(&c, &rhs)))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<'a> Neg for &'a Value {
    type Output = Value;

    fn neg(self) -> Value {
        expect_value(neg_op(self))
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        expect_value(neg_op(&self))
    }
}

#[cfg(test)]
#[path = "operators_test.rs"]
mod tests;
