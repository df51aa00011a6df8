use crate::autograd::graph::Graph;
use crate::error::MichigradError;
use crate::model::sequential::Sequential;
use crate::nn::init::Init;
use crate::nn::layers::{Linear, ReLU};
use crate::nn::module::Module;
use crate::value::Value;
use log::debug;
use rand::Rng;
use std::fmt;

/// Multi-layer perceptron: a stack of [`Linear`] layers, with a [`ReLU`]
/// between consecutive layers when `nonlin` is set. The last layer is
/// always linear.
#[derive(Debug)]
pub struct Mlp {
    layers: Sequential,
    sizes: Vec<usize>,
}

impl Mlp {
    /// Creates an MLP with `nin` inputs and one layer per entry of `nouts`.
    ///
    /// # Errors
    /// `EmptyInput` if `nouts` is empty.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nouts: &[usize],
        nonlin: bool,
        rng: &mut R,
    ) -> Result<Self, MichigradError> {
        Self::with_init(graph, nin, nouts, nonlin, &Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nouts: &[usize],
        nonlin: bool,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, MichigradError> {
        if nouts.is_empty() {
            return Err(MichigradError::EmptyInput {
                operation: "Mlp::new".to_string(),
            });
        }
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);

        let mut layers = Sequential::new();
        for (i, pair) in sizes.windows(2).enumerate() {
            let linear = Linear::with_init(graph, pair[0], pair[1], init, rng)?;
            layers.add_module(&format!("linear{}", i), Box::new(linear));
            if nonlin && i + 2 < sizes.len() {
                layers.add_module(&format!("relu{}", i), Box::new(ReLU));
            }
        }
        debug!(
            "Mlp created: sizes={:?}, nonlin={}, {} parameters",
            sizes,
            nonlin,
            layers.num_parameters()
        );
        Ok(Mlp { layers, sizes })
    }

    /// Layer widths, inputs first.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn layers(&self) -> &Sequential {
        &self.layers
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of {}", self.layers)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MichigradError> {
        self.layers.forward(inputs)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.parameters()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers.named_parameters()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.children()
    }
}
