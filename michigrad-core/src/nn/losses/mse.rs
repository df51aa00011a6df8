use crate::error::MichigradError;
use crate::ops::arithmetic::{div_op, pow_op, sub_op};
use crate::ops::reduction::sum_op;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = MichigradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(MichigradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean Squared Error between predictions and targets, built from graph ops
/// so that `backward` on the loss reaches every prediction.
///
/// With `Reduction::Sum` (the default) the loss is `Σ (p_i - t_i)^2`,
/// with `Reduction::Mean` it is divided by the number of pairs.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes the loss node.
    ///
    /// # Errors
    /// * `InputSizeMismatch` if the slices differ in length.
    /// * `EmptyInput` if both are empty.
    /// * `GraphMismatch` if a prediction and its target live in different graphs.
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, MichigradError> {
        if predictions.len() != targets.len() {
            return Err(MichigradError::InputSizeMismatch {
                operation: "MSELoss calculate".to_string(),
                expected: targets.len(),
                actual: predictions.len(),
            });
        }
        let squares = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| sub_op(p, t).and_then(|diff| pow_op(&diff, 2.0)))
            .collect::<Result<Vec<_>, _>>()?;
        let (first, rest) = squares.split_first().ok_or_else(|| MichigradError::EmptyInput {
            operation: "MSELoss calculate".to_string(),
        })?;
        let total = sum_op(first, rest)?;

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let count = total.graph().value(squares.len() as f64);
                div_op(&total, &count)
            }
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
