//! Prometheus scrape endpoint and HTTP request metrics middleware

pub mod handlers;
pub mod middleware;

pub use handlers::*;
pub use middleware::http_metrics_middleware;
