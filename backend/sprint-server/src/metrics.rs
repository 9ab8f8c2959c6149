use metrics::{counter, histogram};

use std::time::{Duration, Instant};

/// Metrics collector for REST operations
#[derive(Debug, Clone)]
pub struct ApiMetrics {
    prefix: &'static str,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "sprint_api",
        }
    }

    /// Record a request for an operation ("create", "list", ...)
    pub fn request(&self, operation: &str) {
        counter!(format!("{}.requests.total", self.prefix)).increment(1);
        counter!(format!("{}.requests.{}", self.prefix, operation)).increment(1);
    }

    pub fn latency(&self, operation: &str, duration: Duration) {
        histogram!(format!("{}.latency_ms.{}", self.prefix, operation))
            .record(duration.as_millis() as f64);
    }

    /// Record error occurrence
    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }

    /// Count the request and time it until the returned guard drops
    pub fn start(&self, operation: &'static str) -> MetricsTimer {
        self.request(operation);
        MetricsTimer::new(self.clone(), operation)
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper for timing operations; records latency when dropped
pub struct MetricsTimer {
    start: Instant,
    operation: &'static str,
    metrics: ApiMetrics,
}

impl MetricsTimer {
    pub fn new(metrics: ApiMetrics, operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
            metrics,
        }
    }
}

impl Drop for MetricsTimer {
    fn drop(&mut self) {
        self.metrics.latency(self.operation, self.start.elapsed());
    }
}
