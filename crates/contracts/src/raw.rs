//! Raw sink values and the ordered key-value mapping
//!
//! The shared sink text `k1=v1&k2=v3` parses into a [`SinkMap`]; each entry is
//! either decoded text or a bare presence flag (`k2` with no `=value`).

use indexmap::IndexMap;

/// Ordered mapping from key to raw sink value.
///
/// Insertion order is preserved so that re-serializing an unchanged mapping is
/// idempotent and a single-key rewrite leaves every other entry untouched.
pub type SinkMap = IndexMap<String, RawValue>;

/// Raw textual value of one sink entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Key present without `=value` (boolean presence marker)
    Flag,
    /// Percent-decoded value text
    Text(String),
}

impl RawValue {
    /// Build a text value
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The text handed to a value codec for decoding.
    ///
    /// A bare flag decodes through the literal `true`.
    pub fn decode_input(&self) -> &str {
        match self {
            Self::Flag => "true",
            Self::Text(text) => text,
        }
    }

    /// Whether this entry is empty text, i.e. would be omitted from the
    /// serialized sink
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
