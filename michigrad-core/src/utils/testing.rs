use crate::value::Value;

/// Checks that a value's data is within `tolerance` of `expected`.
/// Panics if the difference is larger or the value is stale.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let data = actual
        .try_data()
        .unwrap_or_else(|e| panic!("check_value_near: {}", e));
    let diff = (data - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            data, expected, diff, tolerance
        );
    }
}

/// Element-wise [`check_value_near`] over two sequences of equal length.
pub fn check_values_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let data = a
            .try_data()
            .unwrap_or_else(|err| panic!("check_values_near at index {}: {}", i, err));
        let diff = (data - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, data, e, diff, tolerance
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::graph::Graph;

    #[test]
    fn test_check_value_near_accepts_close_values() {
        let graph = Graph::new();
        check_value_near(&graph.value(1.0 + 1e-9), 1.0, 1e-6);
        check_values_near(&graph.values(&[0.5, -0.5]), &[0.5, -0.5], 0.0);
    }

    #[test]
    #[should_panic(expected = "Data mismatch at index 1")]
    fn test_check_values_near_reports_index() {
        let graph = Graph::new();
        check_values_near(&graph.values(&[0.5, 1.0]), &[0.5, 2.0], 1e-3);
    }

    #[test]
    #[should_panic(expected = "Data mismatch")]
    fn test_check_value_near_rejects_nan() {
        let graph = Graph::new();
        check_value_near(&graph.value(f64::NAN), 0.0, 1.0);
    }
}
