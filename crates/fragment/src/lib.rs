//! # Fragment
//!
//! Wire codec for the shared sink text.
//!
//! Responsibilities:
//! - Parse `k1=v1&k2=v2` text into an ordered [`SinkMap`]
//! - Serialize a [`SinkMap`] back to canonical sink text
//! - Percent escaping so values may contain the structural characters
//!
//! # Example
//!
//! ```
//! use contracts::RawValue;
//!
//! let map = fragment::parse("page=3&debug");
//! assert_eq!(map.get("page"), Some(&RawValue::text("3")));
//! assert_eq!(map.get("debug"), Some(&RawValue::Flag));
//! assert_eq!(fragment::serialize(&map), "page=3&debug");
//! ```

mod parser;
mod percent;
mod writer;

pub use parser::parse;
pub use writer::serialize;

pub use contracts::{RawValue, SinkMap};
