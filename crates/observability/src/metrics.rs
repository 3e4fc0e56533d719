//! Metric recording helpers for sink synchronization
//!
//! Thin wrappers keeping the metric namespace in one place; the mirror and
//! bind engine record through these.

use metrics::counter;

/// Record a full mirror refresh from the sink
pub fn record_pull() {
    counter!("anchor_mirror_pulls_total").increment(1);
}

/// Record a single-key write-back to the sink
pub fn record_push() {
    counter!("anchor_mirror_pushes_total").increment(1);
}

/// Record an external signal dropped inside the debounce window
pub fn record_debounced() {
    counter!("anchor_external_signals_debounced_total").increment(1);
}

/// Record a raw value that failed to decode into its bound type
pub fn record_decode_failure(key: &str) {
    counter!(
        "anchor_decode_failures_total",
        "key" => key.to_string()
    )
    .increment(1);
}

/// Record a newly constructed binding
pub fn record_bind(key: &str) {
    counter!(
        "anchor_binds_total",
        "key" => key.to_string()
    )
    .increment(1);
}
