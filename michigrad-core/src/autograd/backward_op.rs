use crate::autograd::graph::NodeId;
use std::fmt;

/// Local derivative rule of a node, bound when the node is created.
///
/// Every node that results from an operation carries one of these variants,
/// together with the ids of its producers and the forward-time scalars the
/// rule needs. Leaves carry [`BackwardOp::Leaf`] and propagate nothing.
///
/// Subtraction, negation and division have no variant of their own: they are
/// built from `Add`, `Mul` and `Pow` (see [`crate::ops::arithmetic`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Raw scalar (input, constant or trainable parameter).
    Leaf,
    Add {
        lhs: NodeId,
        rhs: NodeId,
    },
    /// Operand values are captured at forward time.
    Mul {
        lhs: NodeId,
        rhs: NodeId,
        lhs_value: f64,
        rhs_value: f64,
    },
    Pow {
        base: NodeId,
        base_value: f64,
        exponent: f64,
    },
    Relu {
        input: NodeId,
        active: bool,
    },
    Tanh {
        input: NodeId,
        output: f64,
    },
    Sigmoid {
        input: NodeId,
        output: f64,
    },
}

impl BackwardOp {
    /// Returns the producers of the node, in operand order.
    ///
    /// The order matches the gradients returned by [`BackwardOp::backward`].
    /// `add(a, a)` lists `a` twice, so it receives both contributions.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs, .. } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Relu { input, .. }
            | BackwardOp::Tanh { input, .. }
            | BackwardOp::Sigmoid { input, .. } => vec![input],
        }
    }

    /// Computes the contribution of this node to each of its producers.
    ///
    /// Given \( g = \frac{\partial \text{root}}{\partial \text{self}} \) (`grad_output`),
    /// returns \( g \cdot \frac{\partial \text{self}}{\partial \text{input}_i} \) for
    /// every input, in the order of [`BackwardOp::inputs`]. The caller adds
    /// these into the producers' gradients.
    pub fn backward(&self, grad_output: f64) -> Vec<f64> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { .. } => vec![grad_output, grad_output],
            BackwardOp::Mul {
                lhs_value,
                rhs_value,
                ..
            } => vec![rhs_value * grad_output, lhs_value * grad_output],
            BackwardOp::Pow {
                base_value,
                exponent,
                ..
            } => vec![exponent * base_value.powf(exponent - 1.0) * grad_output],
            BackwardOp::Relu { active, .. } => {
                vec![if active { grad_output } else { 0.0 }]
            }
            BackwardOp::Tanh { output, .. } => vec![(1.0 - output * output) * grad_output],
            BackwardOp::Sigmoid { output, .. } => vec![output * (1.0 - output) * grad_output],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BackwardOp::Leaf)
    }
}

/// Short operation tag, used by the DOT export and `Debug` output of values.
/// Leaves render as an empty string.
impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => Ok(()),
            BackwardOp::Add { .. } => write!(f, "+"),
            BackwardOp::Mul { .. } => write!(f, "*"),
            BackwardOp::Pow { exponent, .. } => write!(f, "**{}", exponent),
            BackwardOp::Relu { .. } => write!(f, "ReLU"),
            BackwardOp::Tanh { .. } => write!(f, "tanh"),
            BackwardOp::Sigmoid { .. } => write!(f, "sigmoid"),
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
