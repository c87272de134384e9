// Metrics module for Prometheus observability

mod registry;

pub use registry::{
    gather_metrics, ANALYSES_TOTAL, REQUESTS_TOTAL, REQUEST_DURATION, UPSTREAM_CALLS,
    UPSTREAM_CALL_DURATION,
};

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[endpoint])
        .observe(duration_secs);
}

/// Helper to record upstream API call metrics
pub fn record_upstream_call(model: &str, outcome: &str, duration_secs: f64) {
    UPSTREAM_CALLS.with_label_values(&[model, outcome]).inc();

    UPSTREAM_CALL_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

/// Helper to record a completed analysis by image source
pub fn record_analysis(source: &str, model: &str) {
    ANALYSES_TOTAL.with_label_values(&[source, model]).inc();
}
