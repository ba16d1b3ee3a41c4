//! Prometheus scrape endpoint
//!
//! Renders the global `metrics-exporter-prometheus` recorder as Prometheus
//! text format on `GET /metrics`.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state for the metrics endpoint
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

/// Registers help text for every metric the service emits. Called once at
/// startup, right after the recorder is installed.
pub fn describe_metrics() {
    describe_counter!("http_requests_total", "HTTP requests served, by method/path/status");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request latency in seconds, by method/path"
    );
    describe_counter!("bookings_created_total", "Bookings accepted into the ledger");
    describe_counter!(
        "seat_conflicts_total",
        "Booking attempts rejected because the seat already held a live booking"
    );
    describe_counter!("checkouts_created_total", "Hosted checkout sessions created");
    describe_counter!("payment_webhooks_total", "Payment webhook deliveries received");
    describe_counter!("sms_sent_total", "Payment confirmation SMS delivered");
    describe_counter!("sms_failed_total", "Payment confirmation SMS attempts that failed");
}

/// `GET /metrics` — Prometheus scrape endpoint (no auth)
pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    let body = state.handle.render();
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}
