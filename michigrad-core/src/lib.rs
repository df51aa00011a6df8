//! A scalar reverse-mode automatic differentiation engine, with small neural
//! network building blocks on top.
//!
//! Every [`Value`] is a node of a [`Graph`]. Arithmetic on values records the
//! operation; [`Value::backward`] then fills in the gradient of the output
//! with respect to every node it depends on.
//!
//! ```
//! use michigrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.value(2.0);
//! let b = graph.value(-3.0);
//! let c = &a * &b + 1.0;
//! c.backward().unwrap();
//! assert_eq!(c.data(), -5.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;

pub use autograd::{Checkpoint, Graph, NodeId};
pub use error::MichigradError;
pub use value::Value;
