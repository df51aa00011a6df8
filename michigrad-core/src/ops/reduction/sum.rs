use crate::error::MichigradError;
use crate::ops::arithmetic::add_op;
use crate::value::Value;

/// Folds `terms` onto `start` with left-to-right additions:
/// `((start + t0) + t1) + ...`.
///
/// Returns `start` itself when `terms` is empty. Each addition is its own
/// node, so the gradient of every term is the gradient of the result.
pub fn sum_op<'a, I>(start: &Value, terms: I) -> Result<Value, MichigradError>
where
    I: IntoIterator<Item = &'a Value>,
{
    terms
        .into_iter()
        .try_fold(start.clone(), |acc, term| add_op(&acc, term))
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
