// Prometheus metrics registry and collectors

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec, Encoder,
    HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Total number of API requests
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("requests_total", "Total number of API requests"),
        &["method", "endpoint", "status_code"],
        REGISTRY
    ).unwrap();

    /// Request duration histogram
    pub static ref REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("request_duration_seconds", "Request duration in seconds")
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["endpoint"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // UPSTREAM API METRICS
    // ============================================================================

    /// Total chat-completion calls to the Pollinations API
    pub static ref UPSTREAM_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("upstream_calls_total", "Total Pollinations API calls"),
        &["model", "outcome"], // outcome: ok, upstream_error, timeout, network_error, malformed
        REGISTRY
    ).unwrap();

    /// Pollinations API call duration
    pub static ref UPSTREAM_CALL_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("upstream_call_duration_seconds", "Pollinations API call duration")
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["model"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // ANALYSIS METRICS
    // ============================================================================

    /// Completed image analyses
    pub static ref ANALYSES_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("analyses_total", "Total completed image analyses"),
        &["source", "model"], // source: upload, url
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        // Give each family at least one sample so the text exposition
        // includes it, then verify the families are registered.
        crate::metrics::record_request("GET", "/health", 200, 0.001);
        crate::metrics::record_upstream_call("gemini-2.5-flash-lite", "ok", 0.5);
        crate::metrics::record_analysis("upload", "gemini");

        let metrics = gather_metrics();
        assert!(metrics.contains("requests_total"));
        assert!(metrics.contains("request_duration_seconds"));
        assert!(metrics.contains("upstream_calls_total"));
        assert!(metrics.contains("analyses_total"));
    }
}
