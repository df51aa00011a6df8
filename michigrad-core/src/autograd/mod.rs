//! Reverse-mode differentiation over scalar nodes.
//!
//! [`graph::Graph`] is the arena every node lives in, [`backward_op::BackwardOp`]
//! holds the derivative rule of each node, and [`graph::Graph::backward`] walks
//! the graph once, root first, accumulating gradients.

pub mod backward_op;
pub mod dot;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{Checkpoint, Graph, NodeId};
