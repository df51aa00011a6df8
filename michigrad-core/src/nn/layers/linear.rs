use crate::autograd::graph::Graph;
use crate::error::MichigradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Fully connected layer: `out_features` independent linear neurons over the
/// same `in_features` inputs.
#[derive(Debug, Clone)]
pub struct Linear {
    neurons: Vec<Neuron>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a new Linear layer.
    ///
    /// # Arguments
    ///
    /// * `graph` - Graph the parameters are created in.
    /// * `in_features` - Number of inputs of each neuron.
    /// * `out_features` - Number of neurons, i.e. of outputs.
    /// * `rng` - Source for the weight initialisation.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        in_features: usize,
        out_features: usize,
        rng: &mut R,
    ) -> Result<Self, MichigradError> {
        Self::with_init(graph, in_features, out_features, &Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &Graph,
        in_features: usize,
        out_features: usize,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, MichigradError> {
        let neurons = (0..out_features)
            .map(|_| Neuron::with_init(graph, in_features, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Linear {
            neurons,
            in_features,
            out_features,
        })
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `EmptyInput` without neurons, `InputSizeMismatch` if the neurons
    /// disagree on their number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, MichigradError> {
        let in_features = neurons
            .first()
            .map(Neuron::nin)
            .ok_or_else(|| MichigradError::EmptyInput {
                operation: "Linear::from_neurons".to_string(),
            })?;
        if let Some(bad) = neurons.iter().find(|n| n.nin() != in_features) {
            return Err(MichigradError::InputSizeMismatch {
                operation: "Linear::from_neurons".to_string(),
                expected: in_features,
                actual: bad.nin(),
            });
        }
        let out_features = neurons.len();
        Ok(Linear {
            neurons,
            in_features,
            out_features,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl fmt::Display for Linear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearLayer([")?;
        for (i, neuron) in self.neurons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neuron)?;
        }
        write!(f, "])")
    }
}

impl Module for Linear {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MichigradError> {
        if inputs.len() != self.in_features {
            return Err(MichigradError::InputSizeMismatch {
                operation: "Linear::forward".to_string(),
                expected: self.in_features,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
