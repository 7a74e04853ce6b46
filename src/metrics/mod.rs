//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines counters for external commands and bridge operations.

use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};

lazy_static! {
    // Global Prometheus registry.
    pub static ref REGISTRY: Registry = Registry::new();

    // Counter: external CLI invocations by program and outcome.
    pub static ref EXTERNAL_COMMAND_COUNTER: CounterVec = {
        let opts = Opts::new("external_commands_total", "Total number of external chain CLI invocations");
        let counter_vec = CounterVec::new(opts, &["program", "outcome"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Histogram for external command wall time in seconds.
    pub static ref EXTERNAL_COMMAND_DURATION: HistogramVec = {
      let histogram_opts = HistogramOpts::new("external_command_duration_seconds", "External command duration in seconds")
          .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0]);
      let histogram_vec = HistogramVec::new(histogram_opts, &["program"]).unwrap();
      REGISTRY.register(Box::new(histogram_vec.clone())).unwrap();
      histogram_vec
    };

    // Counter: bridge operations by name and outcome.
    pub static ref BRIDGE_OPERATION_COUNTER: CounterVec = {
        let opts = Opts::new("bridge_operations_total", "Total number of bridge operations");
        let counter_vec = CounterVec::new(opts, &["operation", "outcome"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(buffer)
}

/// Records the outcome of a finished bridge operation.
pub fn record_operation<T, E>(operation: &str, result: &Result<T, E>) {
    let outcome = if result.is_ok() { "success" } else { "failure" };
    BRIDGE_OPERATION_COUNTER
        .with_label_values(&[operation, outcome])
        .inc();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_includes_registered_metrics() {
        EXTERNAL_COMMAND_COUNTER
            .with_label_values(&["cast", "success"])
            .inc();
        record_operation::<(), ()>("mint", &Ok(()));

        let text = String::from_utf8(gather_metrics().unwrap()).unwrap();
        assert!(text.contains("external_commands_total"));
        assert!(text.contains("bridge_operations_total"));
    }
}
