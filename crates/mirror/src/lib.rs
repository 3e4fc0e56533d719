//! # Mirror
//!
//! In-process observable cache of the shared sink's parsed key-value mapping.
//!
//! Responsibilities:
//! - `pull()`: re-read and re-parse the full sink text, notify subscribers
//! - `push(key, raw)`: single-key read-modify-write back to the sink
//! - Debounced handling of external-change signals
//! - Backend implementations for tests (`MemorySink`) and unavailable
//!   environments (`NullSink`)
//!
//! ## Usage example
//!
//! ```
//! use std::rc::Rc;
//! use contracts::{SharedSink, SinkOptions};
//! use mirror::{MemorySink, SinkMirror};
//!
//! let backend = MemorySink::new();
//! let mirror = SinkMirror::new(Rc::clone(&backend) as Rc<dyn SharedSink>, &SinkOptions::default());
//!
//! mirror.push("page", "3");
//! assert_eq!(backend.text(), "page=3");
//! ```

mod backend;
#[allow(clippy::module_inception)]
mod mirror;

pub use backend::{MemorySink, NullSink};
pub use mirror::{MirrorSubscription, SinkMirror};
