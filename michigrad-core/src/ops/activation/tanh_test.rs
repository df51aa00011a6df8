use super::*;
use crate::autograd::graph::Graph;
use crate::error::MichigradError;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward_and_backward() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let x = graph.value(0.8);
    let out = tanh_op(&x)?;
    let t = 0.8_f64.tanh();
    assert_relative_eq!(out.data(), t);

    out.backward()?;
    assert_relative_eq!(x.grad(), 1.0 - t * t);
    Ok(())
}

#[test]
fn test_tanh_saturates() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let x = graph.value(30.0);
    let out = tanh_op(&x)?;
    out.backward()?;
    assert_eq!(out.data(), 1.0);
    assert_eq!(x.grad(), 0.0);
    Ok(())
}
