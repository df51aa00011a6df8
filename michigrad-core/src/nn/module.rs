use crate::error::MichigradError;
use crate::value::Value;
use std::fmt;

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// A module maps a slice of input values to output values by appending nodes
/// to the graph, and exposes the leaf values it owns as parameters.
///
/// `Display` gives a short structural summary, e.g. `LinearNeuron(2)` or
/// `Sequential([LinearLayer([...]), Tanh()])`.
pub trait Module: fmt::Debug + fmt::Display {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: The input values, all from the graph the parameters live in.
    ///
    /// # Returns
    /// The output values, or a `MichigradError` if e.g. the number of inputs
    /// does not match the module's fan-in.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MichigradError>;

    /// Returns every learnable parameter of the module, sub-modules included,
    /// in a stable order. The values are handles to the module's own leaves.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters along with their names.
    /// Names follow the nesting of modules (e.g. `"0.neurons.1.bias"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Returns the direct child modules. Empty for modules without children.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Sets the gradient of every parameter to zero.
    ///
    /// Must be called before each backward pass: the engine only ever adds to
    /// gradients.
    fn zero_grad(&self) -> Result<(), MichigradError> {
        for param in self.parameters() {
            param.try_zero_grad()?;
        }
        Ok(())
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
