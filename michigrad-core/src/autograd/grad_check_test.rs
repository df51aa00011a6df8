use super::*;
use crate::ops::arithmetic::{div_op, mul_op};

#[test]
fn test_check_grad_mul() -> Result<(), GradCheckError> {
    let func = |_: &Graph, x: &[Value]| mul_op(&x[0], &x[1]);
    check_grad(func, &[1.5, -2.0], 1e-6, 1e-6)
}

#[test]
fn test_check_grad_composite() -> Result<(), GradCheckError> {
    let func = |_: &Graph, x: &[Value]| -> Result<Value, MichigradError> {
        let h = (&x[0] * &x[1] + x[2].powf(2.0)).tanh();
        div_op(&h, &(x[2].sigmoid() + 1.0))
    };
    check_grad(func, &[0.3, -0.7, 1.2], 1e-6, 1e-6)
}

#[test]
fn test_check_grad_detects_wrong_gradient() {
    // The second factor is a fresh leaf holding a copy of x, so backward only
    // sees half of d(x^2)/dx.
    let func = |graph: &Graph, x: &[Value]| -> Result<Value, MichigradError> {
        let copy = graph.value(x[0].try_data()?);
        mul_op(&x[0], &copy)
    };
    match check_grad(func, &[3.0], 1e-6, 1e-6) {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(analytical_grad, 3.0);
            assert!((numerical_grad - 6.0).abs() < 1e-4);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_reports_forward_errors() {
    let func = |_: &Graph, x: &[Value]| -> Result<Value, MichigradError> {
        let foreign = Graph::new().value(1.0);
        mul_op(&x[0], &foreign)
    };
    assert!(matches!(
        check_grad(func, &[1.0], 1e-6, 1e-6),
        Err(GradCheckError::ForwardPassError(MichigradError::GraphMismatch { .. }))
    ));
}

#[test]
fn test_check_grad_non_finite_numerical() {
    // 1/x at 0: both shifted evaluations are finite but the analytical one is not.
    let func = |_: &Graph, x: &[Value]| Ok(x[0].powf(-1.0));
    assert!(check_grad(func, &[0.0], 1e-6, 1e-6).is_err());
}
