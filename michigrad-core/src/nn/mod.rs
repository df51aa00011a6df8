// src/nn/mod.rs
// Blocs de réseau de neurones : neurones, couches, pertes.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use init::Init;
pub use layers::{Linear, ReLU, Sigmoid, Tanh};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use neuron::Neuron;
