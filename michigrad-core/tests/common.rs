use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `log` output of the crate to the test harness (`RUST_LOG=debug`).
#[allow(dead_code)]
pub fn setup_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Inputs covering the linear region and the saturated tails of tanh and
/// sigmoid, without landing on the ReLU kink at 0.
#[allow(dead_code)]
pub fn sample_points() -> Vec<f64> {
    vec![-6.0, -3.5, -1.25, -0.4, 0.3, 0.9, 2.2, 4.75, 8.0]
}
