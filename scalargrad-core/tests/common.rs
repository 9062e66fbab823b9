use scalargrad_core::value::{leaves, Value};

/// Installs a test logger once per test binary. Honours `RUST_LOG`.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lifts raw numbers to leaves; shorthand shared by the integration tests.
#[allow(dead_code)]
pub fn inputs(data: &[f64]) -> Vec<Value> {
    leaves(data)
}

/// Collects the gradients of `values`.
#[allow(dead_code)]
pub fn grads(values: &[Value]) -> Vec<f64> {
    values.iter().map(Value::grad).collect()
}
