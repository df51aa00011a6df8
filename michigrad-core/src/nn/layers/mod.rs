//! Layers built from neurons and element-wise activations.

pub mod activation;
pub mod linear;

pub use activation::{ReLU, Sigmoid, Tanh};
pub use linear::Linear;
