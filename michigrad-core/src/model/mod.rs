//! Containers composing [`crate::nn`] modules into models.

pub mod mlp;
pub mod sequential;

pub use mlp::Mlp;
pub use sequential::Sequential;
