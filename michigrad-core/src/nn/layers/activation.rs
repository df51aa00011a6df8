//! Parameterless activation layers, for use in [`crate::model::Sequential`].

use crate::error::MichigradError;
use crate::nn::module::Module;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::value::Value;
use std::fmt;

macro_rules! activation_layer {
    ($(#[$doc:meta])* $name:ident, $op_fn:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            pub fn new() -> Self {
                $name
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "()"))
            }
        }

        impl Module for $name {
            fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MichigradError> {
                inputs.iter().map($op_fn).collect()
            }

            fn parameters(&self) -> Vec<Value> {
                Vec::new()
            }

            fn named_parameters(&self) -> Vec<(String, Value)> {
                Vec::new()
            }
        }
    };
}

activation_layer!(
    /// Applies `max(0, x)` to every input.
    ReLU,
    relu_op
);
activation_layer!(
    /// Applies `tanh(x)` to every input.
    Tanh,
    tanh_op
);
activation_layer!(
    /// Applies `1 / (1 + e^-x)` to every input.
    Sigmoid,
    sigmoid_op
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::graph::Graph;

    #[test]
    fn test_relu_layer() -> Result<(), MichigradError> {
        let graph = Graph::new();
        let inputs = graph.values(&[-1.0, 0.0, 2.5]);
        let outputs = ReLU::new().forward(&inputs)?;
        let data: Vec<f64> = outputs.iter().map(Value::data).collect();
        assert_eq!(data, vec![0.0, 0.0, 2.5]);
        assert_eq!(ReLU.num_parameters(), 0);
        Ok(())
    }

    #[test]
    fn test_tanh_and_sigmoid_layers() -> Result<(), MichigradError> {
        let graph = Graph::new();
        let inputs = graph.values(&[0.0]);
        assert_eq!(Tanh.forward(&inputs)?[0].data(), 0.0);
        assert_eq!(Sigmoid.forward(&inputs)?[0].data(), 0.5);
        assert!(Sigmoid.named_parameters().is_empty());
        assert_eq!(format!("{} {} {}", ReLU, Tanh, Sigmoid), "ReLU() Tanh() Sigmoid()");
        Ok(())
    }

    #[test]
    fn test_activation_layer_empty_input() -> Result<(), MichigradError> {
        assert!(Tanh.forward(&[])?.is_empty());
        Ok(())
    }
}
