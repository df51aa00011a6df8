use crate::autograd::graph::NodeId;
use crate::error::MichigradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use log::{debug, trace};
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// For each parameter `p` with gradient `g`:
///
/// ```text
/// d_p = g + weight_decay * p.data      (weight decay term only if non-zero)
/// buf = momentum * buf + d_p           (only if momentum is non-zero)
/// p.data = p.data + (-lr * d_p)        (d_p replaced by buf with momentum)
/// ```
///
/// With the defaults (no momentum, no weight decay) this is exactly the
/// classic `p.data += -lr * p.grad`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // Keyed by node id; a parameter keeps its id across rewinds.
    momentum_buffers: HashMap<NodeId, f64>,
}

impl Sgd {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize, e.g. `model.parameters()`.
    /// * `lr`: The learning rate.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Self {
        Sgd {
            params: params.into_iter().collect(),
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    /// L2 penalty added to the gradient before the update.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), MichigradError> {
        debug!(
            "SGD step: {} params, lr={}, momentum={}, weight_decay={}",
            self.params.len(),
            self.lr,
            self.momentum,
            self.weight_decay
        );
        for param in &self.params {
            let data = param.try_data()?;
            let mut d_p = param.try_grad()?;

            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * data;
            }

            if self.momentum != 0.0 {
                let buffer = self.momentum_buffers.entry(param.id()).or_insert(0.0);
                *buffer = self.momentum * *buffer + d_p;
                d_p = *buffer;
            }

            let updated = data + (-self.lr * d_p);
            trace!("SGD update {:?}: {} -> {}", param.id(), data, updated);
            param.try_set_data(updated)?;
        }
        Ok(())
    }

    fn zero_grad(&mut self) -> Result<(), MichigradError> {
        for param in &self.params {
            param.try_zero_grad()?;
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
