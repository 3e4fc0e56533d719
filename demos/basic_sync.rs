//! Basic synchronization walkthrough.
//!
//! Binds two keys to an in-memory sink, mutates them locally, and prints the
//! sink text after each step.
//!
//! Run with: cargo run --bin basic_sync

use std::rc::Rc;

use anchor::{JsonCodec, SinkContext};
use contracts::SharedSink;
use mirror::MemorySink;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Viewport {
    zoom: u8,
    dark_mode: bool,
}

fn main() -> anyhow::Result<()> {
    observability::init_with_config(observability::ObservabilityConfig {
        log_format: observability::LogFormat::Pretty,
        ..Default::default()
    })?;

    let sink = MemorySink::new();
    let ctx = SinkContext::with_defaults(Rc::clone(&sink) as Rc<dyn SharedSink>);

    let page = ctx.bind("page", 1u32, JsonCodec::new())?;
    let viewport = ctx.bind(
        "viewport",
        Viewport {
            zoom: 100,
            dark_mode: false,
        },
        JsonCodec::new(),
    )?;

    info!(sink = %sink.text(), "initial values landed in the sink");

    page.set(3);
    info!(sink = %sink.text(), "after page.set(3)");

    viewport.set(Viewport {
        zoom: 150,
        dark_mode: true,
    });
    info!(sink = %sink.text(), "after viewport update");

    // Binding the same key again returns the identical store
    let page_again = ctx.bind("page", 99u32, JsonCodec::new())?;
    assert!(page.ptr_eq(&page_again));
    info!(value = page_again.get(), "second bind reuses the first store");

    Ok(())
}
