//! External edit walkthrough.
//!
//! Simulates a user editing the shared sink by hand: well-formed edits flow
//! into the bound stores, malformed ones fall back without panicking.
//!
//! Run with: cargo run --bin external_edits

use std::rc::Rc;

use anchor::{SinkContext, SinkOptions, ValueCodec};
use contracts::{AnchorError, SharedSink};
use mirror::MemorySink;
use tracing::info;

/// Plain integer codec without JSON quoting; `false` reads as zero
struct IntCodec;

impl ValueCodec<i64> for IntCodec {
    fn encode(&self, value: &i64) -> Result<String, AnchorError> {
        Ok(value.to_string())
    }

    fn decode(&self, raw: &str) -> Result<i64, AnchorError> {
        if raw == "false" {
            return Ok(0);
        }
        raw.parse()
            .map_err(|e: std::num::ParseIntError| AnchorError::decode(e.to_string()))
    }
}

fn main() -> anyhow::Result<()> {
    observability::init_with_config(observability::ObservabilityConfig {
        log_format: observability::LogFormat::Pretty,
        ..Default::default()
    })?;

    let sink = MemorySink::new();
    let options = SinkOptions {
        debounce_ms: 0,
        ..Default::default()
    };
    let ctx = SinkContext::new(Rc::clone(&sink) as Rc<dyn SharedSink>, &options);

    let count = ctx.bind("count", 5i64, IntCodec)?;
    info!(sink = %sink.text(), value = count.get(), "bound");

    sink.set_external("count=42");
    info!(value = count.get(), "after external count=42");

    sink.set_external("count=notanumber");
    info!(value = count.get(), "after malformed edit (fell back to 0)");

    sink.set_external("");
    info!(value = count.get(), sink = %sink.text(), "after the sink was wiped");

    Ok(())
}
