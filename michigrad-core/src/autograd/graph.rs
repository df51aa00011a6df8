use crate::autograd::backward_op::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use log::{debug, trace};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Identifier of a node inside a [`Graph`] arena.
///
/// The `generation` is the graph generation at creation time. A rewind bumps
/// the graph generation, so an id whose slot was released and reused no longer
/// matches the node stored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Position of the node in the arena. Producers always have a lower index
    /// than the nodes they feed.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Arena length recorded by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
}

impl Checkpoint {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// One scalar of the computation graph.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: BackwardOp,
    pub(crate) label: Option<String>,
    generation: u32,
}

/// Storage behind a [`Graph`] handle.
#[derive(Debug, Default)]
pub(crate) struct GraphData {
    nodes: Vec<Node>,
    generation: u32,
}

impl GraphData {
    pub(crate) fn node(&self, id: NodeId) -> Result<&Node, MichigradError> {
        self.nodes
            .get(id.index)
            .filter(|node| node.generation == id.generation)
            .ok_or(MichigradError::StaleValue {
                index: id.index,
                generation: id.generation,
            })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, MichigradError> {
        self.nodes
            .get_mut(id.index)
            .filter(|node| node.generation == id.generation)
            .ok_or(MichigradError::StaleValue {
                index: id.index,
                generation: id.generation,
            })
    }

    fn push(&mut self, data: f64, op: BackwardOp) -> NodeId {
        let id = NodeId {
            index: self.nodes.len(),
            generation: self.generation,
        };
        self.nodes.push(Node {
            data,
            grad: 0.0,
            op,
            label: None,
            generation: self.generation,
        });
        id
    }

    /// Depth-first post-order over the producer relation, starting at `root`.
    ///
    /// Every node appears after all of its producers, so iterating the result
    /// in reverse visits the root first and each node only once all of its
    /// consumers (on paths to the root) are done.
    /// Uses an explicit stack; deep chains do not grow the call stack.
    pub(crate) fn topological_sort(&self, root: NodeId) -> Result<Vec<NodeId>, MichigradError> {
        self.node(root)?;

        // Local to this call, indexed by arena position.
        let mut visited = vec![false; self.nodes.len()];
        let mut sorted_list = Vec::new();
        // (node, inputs already pushed)
        let mut stack = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                sorted_list.push(id);
                continue;
            }
            if visited[id.index] {
                continue;
            }
            visited[id.index] = true;
            stack.push((id, true));
            // Reversed so the first operand is explored first.
            for input in self.nodes[id.index].op.inputs().into_iter().rev() {
                if !visited[input.index] {
                    stack.push((input, false));
                }
            }
        }
        Ok(sorted_list)
    }

    pub(crate) fn backward(&mut self, root: NodeId) -> Result<(), MichigradError> {
        let sorted_nodes = self.topological_sort(root)?;
        debug!(
            "backward: {} nodes reachable from node {}",
            sorted_nodes.len(),
            root.index
        );

        self.nodes[root.index].grad = 1.0;

        for id in sorted_nodes.iter().rev() {
            let node = &self.nodes[id.index];
            if node.op.is_leaf() {
                continue;
            }
            let op = node.op;
            let grad_output = node.grad;
            trace!("backward: node {} ({}) grad {}", id.index, op, grad_output);

            for (input, grad_to_add) in op.inputs().into_iter().zip(op.backward(grad_output)) {
                // Accumulate, a producer may feed several consumers.
                self.nodes[input.index].grad += grad_to_add;
            }
        }
        Ok(())
    }
}

/// Arena owning every node of a computation.
///
/// `Graph` is a shared handle: clones point at the same arena, and every
/// [`Value`] keeps one so operators can append new nodes. Nodes are only
/// ever appended, which keeps the producer relation acyclic.
///
/// Parameters are usually created first. A training loop then takes a
/// [`Checkpoint`] and rewinds to it after each step, which drops that pass's
/// intermediate nodes while the parameters survive.
#[derive(Clone, Default)]
pub struct Graph {
    inner: Rc<RefCell<GraphData>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates a leaf node holding `data`.
    pub fn value(&self, data: f64) -> Value {
        self.push(data, BackwardOp::Leaf)
    }

    /// Creates one leaf per element of `data`, in order.
    pub fn values(&self, data: &[f64]) -> Vec<Value> {
        data.iter().map(|&x| self.value(x)).collect()
    }

    /// Number of live nodes in the arena.
    pub fn len(&self) -> usize {
        self.read().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().nodes.is_empty()
    }

    /// Returns `true` if both handles share the same arena.
    pub fn ptr_eq(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Records the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { len: self.len() }
    }

    /// Releases every node created after `checkpoint`.
    ///
    /// Handles to released nodes become stale: fallible accessors report
    /// [`MichigradError::StaleValue`] for them, even once the slot is reused.
    ///
    /// # Errors
    /// Returns [`MichigradError::InvalidCheckpoint`] if the arena is already
    /// shorter than the checkpoint (e.g. after rewinding to an earlier one).
    pub fn rewind(&self, checkpoint: Checkpoint) -> Result<(), MichigradError> {
        let mut data = self.write();
        let len = data.nodes.len();
        if checkpoint.len > len {
            return Err(MichigradError::InvalidCheckpoint {
                checkpoint: checkpoint.len,
                len,
            });
        }
        data.nodes.truncate(checkpoint.len);
        data.generation = data.generation.wrapping_add(1);
        debug!(
            "rewind: released {} nodes, {} remain (generation {})",
            len - checkpoint.len,
            checkpoint.len,
            data.generation
        );
        Ok(())
    }

    /// Resets the gradient of every node in the arena to zero.
    pub fn zero_grad(&self) {
        for node in self.write().nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Orders the nodes reachable from `root`, producers first.
    /// See [`Graph::backward`] for how the order is consumed.
    pub fn topological_sort(&self, root: &Value) -> Result<Vec<NodeId>, MichigradError> {
        self.check_owns(root, "topological_sort")?;
        self.read().topological_sort(root.id())
    }

    /// Runs the backward pass from `root`.
    ///
    /// Seeds `root.grad = 1` and then, root first, lets every reachable node
    /// add its local contribution into its producers. Gradients are never
    /// reset here: calling it twice without [`Graph::zero_grad`] (or
    /// [`crate::nn::Module::zero_grad`]) compounds the results. Called on an
    /// intermediate node, it computes derivatives of that node.
    ///
    /// # Errors
    /// `GraphMismatch` if `root` lives in another graph, `StaleValue` if it was
    /// released by a rewind.
    pub fn backward(&self, root: &Value) -> Result<(), MichigradError> {
        self.check_owns(root, "backward")?;
        self.write().backward(root.id())
    }

    pub(crate) fn push(&self, data: f64, op: BackwardOp) -> Value {
        let id = self.write().push(data, op);
        Value::from_parts(self.clone(), id)
    }

    pub(crate) fn read(&self) -> Ref<'_, GraphData> {
        self.inner.borrow()
    }

    pub(crate) fn write(&self) -> RefMut<'_, GraphData> {
        self.inner.borrow_mut()
    }

    fn check_owns(&self, value: &Value, operation: &str) -> Result<(), MichigradError> {
        if self.ptr_eq(value.graph()) {
            Ok(())
        } else {
            Err(MichigradError::GraphMismatch {
                operation: operation.to_string(),
            })
        }
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read();
        write!(
            f,
            "Graph(nodes={}, generation={})",
            data.nodes.len(),
            data.generation
        )
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
