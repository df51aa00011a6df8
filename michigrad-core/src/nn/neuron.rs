use crate::autograd::graph::Graph;
use crate::error::MichigradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::ops::arithmetic::mul_op;
use crate::ops::reduction::sum_op;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Linear neuron: `y = w · x + b`.
///
/// No activation is applied; stack an activation layer after it (see
/// [`crate::nn::layers::activation`]) for a non-linear model.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn from [`Init::default`] and a
    /// zero bias, all as leaves of `graph`.
    pub fn new<R: Rng + ?Sized>(graph: &Graph, nin: usize, rng: &mut R) -> Result<Self, MichigradError> {
        Self::with_init(graph, nin, &Init::default(), rng)
    }

    /// Like [`Neuron::new`] with an explicit weight initialiser. The bias
    /// always starts at zero.
    pub fn with_init<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, MichigradError> {
        let weights = (0..nin)
            .map(|_| init.sample(rng).map(|w| graph.value(w)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Neuron {
            weights,
            bias: graph.value(0.0),
        })
    }

    /// Builds a neuron around existing leaves, e.g. fixed weights in tests.
    pub fn from_values(weights: Vec<Value>, bias: Value) -> Self {
        Neuron { weights, bias }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Number of inputs.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Computes `b + w0*x0 + w1*x1 + ...`, in that order.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, MichigradError> {
        if inputs.len() != self.nin() {
            return Err(MichigradError::InputSizeMismatch {
                operation: "Neuron::forward".to_string(),
                expected: self.nin(),
                actual: inputs.len(),
            });
        }
        let products = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| mul_op(w, x))
            .collect::<Result<Vec<_>, _>>()?;
        sum_op(&self.bias, &products)
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearNeuron({})", self.nin())
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MichigradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        params.push(("bias".to_string(), self.bias.clone()));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
