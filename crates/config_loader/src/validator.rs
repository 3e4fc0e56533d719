//! Configuration validation
//!
//! Validation rules:
//! - debounce_ms bounded (a window longer than a minute would make the sink
//!   effectively deaf to external changes)
//! - metrics_port outside the well-known range

use contracts::{AnchorError, SinkOptions};

const MAX_DEBOUNCE_MS: u64 = 60_000;

/// Validate sink options
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(options: &SinkOptions) -> Result<(), AnchorError> {
    validate_debounce(options)?;
    validate_metrics_port(options)?;
    Ok(())
}

fn validate_debounce(options: &SinkOptions) -> Result<(), AnchorError> {
    if options.debounce_ms > MAX_DEBOUNCE_MS {
        return Err(AnchorError::config_validation(
            "debounce_ms",
            format!(
                "must be <= {MAX_DEBOUNCE_MS}, got {}",
                options.debounce_ms
            ),
        ));
    }
    Ok(())
}

fn validate_metrics_port(options: &SinkOptions) -> Result<(), AnchorError> {
    if let Some(port) = options.metrics_port {
        if port < 1024 {
            return Err(AnchorError::config_validation(
                "metrics_port",
                format!("must be >= 1024, got {port}"),
            ));
        }
    }
    Ok(())
}
