use axum::{http::StatusCode, response::IntoResponse};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use tracing::warn;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Safe to call more than once.
pub fn init_metrics() {
    if PROMETHEUS_HANDLE.get().is_some() {
        return;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            if PROMETHEUS_HANDLE.set(handle).is_err() {
                return;
            }

            // Initialize metrics with zero values
            counter!("roast_requests_total", "tld" => "unknown").absolute(0);
            counter!("roast_lookup_fallbacks_total", "error_type" => "unknown").absolute(0);
            counter!("roast_errors_total", "error_type" => "unknown").absolute(0);
            counter!("roast_rate_limited_total").absolute(0);
        }
        Err(e) => {
            warn!("Failed to install metrics recorder: {}", e);
        }
    }
}

pub fn increment_requests(tld: &str) {
    counter!("roast_requests_total", "tld" => tld.to_string()).increment(1);
}

pub fn increment_lookup_fallbacks(error_type: &'static str) {
    counter!("roast_lookup_fallbacks_total", "error_type" => error_type).increment(1);
}

pub fn increment_errors(error_type: &'static str) {
    counter!("roast_errors_total", "error_type" => error_type).increment(1);
}

pub fn increment_rate_limited() {
    counter!("roast_rate_limited_total").increment(1);
}

pub fn record_request(duration_ms: u64, score: u8) {
    histogram!("roast_request_duration_seconds").record(duration_ms as f64 / 1000.0);
    histogram!("roast_score").record(score as f64);
}

pub async fn metrics_handler() -> impl IntoResponse {
    match PROMETHEUS_HANDLE.get() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::SERVICE_UNAVAILABLE, "Metrics not initialized".to_string()),
    }
}
