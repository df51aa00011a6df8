use super::*;
use crate::autograd::graph::Graph;
use crate::error::MichigradError;
use approx::assert_relative_eq;

#[test]
fn test_pow_square() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let a = graph.value(-3.0);
    let c = pow_op(&a, 2.0)?;
    assert_eq!(c.data(), 9.0);
    assert_eq!(c.op_label()?, "**2");

    c.backward()?;
    assert_eq!(a.grad(), -6.0);
    Ok(())
}

#[test]
fn test_pow_fractional_exponent() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let a = graph.value(4.0);
    let c = pow_op(&a, 0.5)?;
    assert_relative_eq!(c.data(), 2.0);

    c.backward()?;
    assert_relative_eq!(a.grad(), 0.25);
    Ok(())
}

#[test]
fn test_pow_zero_base_negative_exponent_is_infinite() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let a = graph.value(0.0);
    let c = pow_op(&a, -1.0)?;
    assert!(c.data().is_infinite());
    Ok(())
}

#[test]
fn test_pow_stale_base() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let checkpoint = graph.checkpoint();
    let a = graph.value(2.0);
    graph.rewind(checkpoint)?;
    assert!(matches!(
        pow_op(&a, 2.0),
        Err(MichigradError::StaleValue { index: 0, .. })
    ));
    Ok(())
}
