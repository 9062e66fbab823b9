use crate::value::Value;

/// Checks that a node holds the expected data and gradient within `tolerance`.
/// Panics with a descriptive message otherwise.
pub fn check_value_near(actual: &Value, expected_data: f64, expected_grad: f64, tolerance: f64) {
    let data = actual.data();
    let grad = actual.grad();
    if (data - expected_data).abs() > tolerance {
        panic!(
            "Data mismatch for {}: actual={:?}, expected={:?}, tolerance={:?}",
            actual, data, expected_data, tolerance
        );
    }
    if (grad - expected_grad).abs() > tolerance {
        panic!(
            "Grad mismatch for {}: actual={:?}, expected={:?}, tolerance={:?}",
            actual, grad, expected_grad, tolerance
        );
    }
}

/// Checks the gradients of several nodes at once.
/// Panics if lengths differ or any gradient differs significantly.
pub fn check_grads_near(actual: &[Value], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected_grads.len(),
        "Gradient count mismatch"
    );
    for (i, (v, e)) in actual.iter().zip(expected_grads.iter()).enumerate() {
        let diff = (v.grad() - *e).abs();
        if diff > tolerance {
            panic!(
                "Grad mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                v.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}
