use super::*;
use crate::autograd::graph::Graph;
use approx::assert_relative_eq;

// loss = w0 * 3 + w1 * w1, so grad = [3, 2 * w1]
fn quadratic_setup(graph: &Graph) -> (Vec<Value>, Value) {
    let params = graph.values(&[1.0, -2.0]);
    let loss = &(&params[0] * 3.0) + &(&params[1] * &params[1]);
    (params, loss)
}

#[test]
fn test_sgd_basic_step() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let (params, loss) = quadratic_setup(&graph);
    loss.backward()?;

    let mut optimizer = Sgd::new(params.clone(), 0.1);
    optimizer.step()?;

    assert_eq!(params[0].data(), 1.0 + (-0.1 * 3.0));
    assert_eq!(params[1].data(), -2.0 + (-0.1 * -4.0));
    // Gradients are kept until zero_grad.
    assert_eq!(params[0].grad(), 3.0);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let (params, loss) = quadratic_setup(&graph);
    loss.backward()?;

    let mut optimizer = Sgd::new(params.clone(), 0.1);
    optimizer.zero_grad()?;
    assert!(params.iter().all(|p| p.grad() == 0.0));
    // Nothing moves without gradient.
    optimizer.step()?;
    assert_eq!(params[0].data(), 1.0);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let (params, loss) = quadratic_setup(&graph);
    loss.backward()?;

    let mut optimizer = Sgd::new(params.clone(), 0.1).with_weight_decay(0.5);
    optimizer.step()?;
    // d_p = 3 + 0.5 * 1
    assert_relative_eq!(params[0].data(), 1.0 - 0.1 * 3.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_momentum_accumulates() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let w = graph.value(0.0);
    let loss = &w * 2.0;
    loss.backward()?;

    let mut optimizer = Sgd::new(vec![w.clone()], 0.1).with_momentum(0.9);
    assert_eq!(optimizer.momentum(), 0.9);
    optimizer.step()?;
    // buf = 2
    assert_relative_eq!(w.data(), -0.2, epsilon = 1e-12);
    // Same gradient again: buf = 0.9 * 2 + 2 = 3.8
    optimizer.step()?;
    assert_relative_eq!(w.data(), -0.2 - 0.38, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_learning_rate_accessors() {
    let graph = Graph::new();
    let mut optimizer = Sgd::new(graph.values(&[1.0]), 0.01);
    assert_eq!(optimizer.learning_rate(), 0.01);
    optimizer.set_learning_rate(0.5);
    assert_eq!(optimizer.learning_rate(), 0.5);
    assert_eq!(optimizer.params().len(), 1);
    assert_eq!(optimizer.weight_decay(), 0.0);
}

#[test]
fn test_sgd_stale_param() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let checkpoint = graph.checkpoint();
    let w = graph.value(1.0);
    graph.rewind(checkpoint)?;

    let mut optimizer = Sgd::new(vec![w], 0.1);
    assert!(matches!(
        optimizer.step(),
        Err(MichigradError::StaleValue { .. })
    ));
    Ok(())
}
