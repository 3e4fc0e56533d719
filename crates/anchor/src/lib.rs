//! # Anchor
//!
//! Bind engine: per-key observable stores kept bidirectionally synchronized
//! with a shared textual key-value sink.
//!
//! Responsibilities:
//! - Bound store construction with sink-seeded starting values
//! - Loop suppression via per-key last-raw-value comparison
//! - Store registry (one store instance per key, process lifetime)
//!
//! ## Usage example
//!
//! ```
//! use anchor::{JsonCodec, SinkContext};
//! use mirror::MemorySink;
//!
//! let sink = MemorySink::new();
//! let ctx = SinkContext::with_defaults(sink.clone());
//!
//! let page = ctx.bind("page", 1u32, JsonCodec::new()).unwrap();
//! page.set(3);
//! assert_eq!(sink.text(), "page=3");
//!
//! // External edits flow back into the store
//! sink.set_external("page=7");
//! assert_eq!(page.get(), 7);
//! ```

mod context;
mod registry;

pub use context::SinkContext;

// Re-export contracts types used at the binding surface
pub use contracts::{
    AnchorError, JsonCodec, ObservableCell, SharedSink, SinkOptions, Subscription, ValueCodec,
};
