//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait and the `Sgd` implementation.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
