use super::*;
use crate::autograd::graph::Graph;
use crate::error::MichigradError;

#[test]
fn test_neg_forward_and_backward() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let a = graph.value(2.5);
    let c = neg_op(&a)?;
    assert_eq!(c.data(), -2.5);
    // Built from a multiplication by a -1 constant.
    assert_eq!(c.op_label()?, "*");
    assert_eq!(c.producers()?[1].data(), -1.0);

    c.backward()?;
    assert_eq!(a.grad(), -1.0);
    Ok(())
}

#[test]
fn test_neg_stale_operand_creates_nothing() -> Result<(), MichigradError> {
    let graph = Graph::new();
    let checkpoint = graph.checkpoint();
    let a = graph.value(2.0);
    graph.rewind(checkpoint)?;

    assert!(matches!(neg_op(&a), Err(MichigradError::StaleValue { .. })));
    assert!(graph.is_empty());
    Ok(())
}
