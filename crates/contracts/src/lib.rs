//! # Contracts
//!
//! Frozen interface contracts, defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Execution Model
//! - Single-threaded, synchronous, reentrant: all notification happens on the
//!   calling thread, within the triggering call
//! - Nothing here is `Send` or `Sync`; a multi-threaded host must add its own
//!   locking around the sink read-modify-write

mod cell;
mod codec;
mod error;
mod options;
mod raw;
mod sink;

pub use cell::{ObservableCell, Subscription};
pub use codec::{JsonCodec, ValueCodec};
pub use error::AnchorError;
pub use options::SinkOptions;
pub use raw::{RawValue, SinkMap};
pub use sink::SharedSink;
