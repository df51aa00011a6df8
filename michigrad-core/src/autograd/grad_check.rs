use crate::autograd::graph::Graph;
use crate::error::MichigradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MichigradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MichigradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Engine error during gradient check: {0}")]
    EngineError(MichigradError),
}

impl From<MichigradError> for GradCheckError {
    fn from(err: MichigradError) -> Self {
        GradCheckError::EngineError(err)
    }
}

/// Checks analytical gradients against centered finite differences.
///
/// `func` builds a scalar output from leaves holding `inputs`. It is called
/// once on a fresh graph to run `backward`, then twice per input with that
/// input shifted by `±epsilon`, each time on a fresh graph:
///
/// \\[ \frac{f(x + \epsilon) - f(x - \epsilon)}{2 \epsilon} \\]
///
/// An input passes when the two gradients agree within `tolerance`, either
/// absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, MichigradError>,
{
    // --- Analytical gradients ---
    let graph = Graph::new();
    let leaves = graph.values(inputs);
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads = leaves
        .iter()
        .map(Value::try_grad)
        .collect::<Result<Vec<f64>, MichigradError>>()?;

    // --- Numerical gradients ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Runs `func` on a fresh graph with `inputs[index]` shifted by `delta`.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, MichigradError>,
{
    let mut perturbed = inputs.to_vec();
    perturbed[index] += delta;
    let graph = Graph::new();
    let leaves = graph.values(&perturbed);
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.try_data()?)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
