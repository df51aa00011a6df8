//! The scalar node handle used by client code.

use crate::autograd::backward_op::BackwardOp;
use crate::autograd::graph::{Graph, NodeId};
use crate::error::MichigradError;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::pow_op;
use std::fmt;

pub mod operators;

/// A scalar in a computation graph.
///
/// A `Value` is a handle: the graph it belongs to plus the id of its node.
/// Cloning it is cheap and every clone refers to the same node. Combining
/// values with `+ - * /`, unary `-`, [`Value::powf`] or the activation
/// methods appends a new node to the shared [`Graph`].
///
/// The `try_*` accessors report a stale handle (node released by
/// [`Graph::rewind`]) as an error. The short forms panic instead.
#[derive(Clone)]
pub struct Value {
    graph: Graph,
    id: NodeId,
}

impl Value {
    pub(crate) fn from_parts(graph: Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        self.graph.ptr_eq(&other.graph) && self.id == other.id
    }

    pub fn try_data(&self) -> Result<f64, MichigradError> {
        Ok(self.graph.read().node(self.id)?.data)
    }

    pub fn try_grad(&self) -> Result<f64, MichigradError> {
        Ok(self.graph.read().node(self.id)?.grad)
    }

    /// Overwrites the forward value in place.
    ///
    /// Meant for optimizer steps between passes. Nodes already built from this
    /// one keep the operand values they captured at creation.
    pub fn try_set_data(&self, data: f64) -> Result<(), MichigradError> {
        self.graph.write().node_mut(self.id)?.data = data;
        Ok(())
    }

    pub fn try_zero_grad(&self) -> Result<(), MichigradError> {
        self.graph.write().node_mut(self.id)?.grad = 0.0;
        Ok(())
    }

    /// Forward value of the node.
    ///
    /// # Panics
    /// Panics if the node was released by a rewind. See [`Value::try_data`].
    pub fn data(&self) -> f64 {
        self.try_data().unwrap_or_else(|e| panic!("{}", e))
    }

    /// Accumulated gradient of the last backward pass(es).
    ///
    /// # Panics
    /// Panics if the node was released by a rewind. See [`Value::try_grad`].
    pub fn grad(&self) -> f64 {
        self.try_grad().unwrap_or_else(|e| panic!("{}", e))
    }

    /// # Panics
    /// Panics if the node was released by a rewind.
    pub fn set_data(&self, data: f64) {
        self.try_set_data(data).unwrap_or_else(|e| panic!("{}", e))
    }

    /// # Panics
    /// Panics if the node was released by a rewind.
    pub fn zero_grad(&self) {
        self.try_zero_grad().unwrap_or_else(|e| panic!("{}", e))
    }

    /// Derivative rule the node was created with.
    pub fn op(&self) -> Result<BackwardOp, MichigradError> {
        Ok(self.graph.read().node(self.id)?.op)
    }

    /// Operation tag (`"+"`, `"*"`, `"**2"`, `"tanh"`...), empty for leaves.
    pub fn op_label(&self) -> Result<String, MichigradError> {
        Ok(self.op()?.to_string())
    }

    pub fn is_leaf(&self) -> Result<bool, MichigradError> {
        Ok(self.op()?.is_leaf())
    }

    /// The nodes this one was computed from, in operand order.
    pub fn producers(&self) -> Result<Vec<Value>, MichigradError> {
        Ok(self
            .op()?
            .inputs()
            .into_iter()
            .map(|id| Value::from_parts(self.graph.clone(), id))
            .collect())
    }

    pub fn label(&self) -> Result<Option<String>, MichigradError> {
        Ok(self.graph.read().node(self.id)?.label.clone())
    }

    /// Attaches a display name, shown by [`crate::autograd::dot::to_dot`].
    pub fn set_label(&self, label: impl Into<String>) -> Result<(), MichigradError> {
        self.graph.write().node_mut(self.id)?.label = Some(label.into());
        Ok(())
    }

    /// Builder form of [`Value::set_label`].
    pub fn with_label(self, label: impl Into<String>) -> Result<Self, MichigradError> {
        self.set_label(label)?;
        Ok(self)
    }

    /// Computes the gradient of this value with respect to every node it
    /// depends on. See [`Graph::backward`].
    pub fn backward(&self) -> Result<(), MichigradError> {
        self.graph.backward(self)
    }

    /// Raises the value to a constant power.
    ///
    /// The exponent is a plain `f64`: raising to another node is not supported.
    pub fn powf(&self, exponent: f64) -> Value {
        operators::expect_value(pow_op(self, exponent))
    }

    pub fn relu(&self) -> Value {
        operators::expect_value(relu_op(self))
    }

    pub fn tanh(&self) -> Value {
        operators::expect_value(tanh_op(self))
    }

    pub fn sigmoid(&self) -> Value {
        operators::expect_value(sigmoid_op(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.graph.read();
        match data.node(self.id) {
            Ok(node) => write!(f, "Value(data={}, grad={})", node.data, node.grad),
            Err(_) => write!(f, "Value(<stale node {}>)", self.id.index()),
        }
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
