//! ValueCodec trait - typed value <-> wire text conversion
//!
//! Supplied by the caller when binding a key; [`JsonCodec`] is the default
//! generic round-trip.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::AnchorError;

/// Conversion between a typed value and its textual wire representation.
///
/// Both directions return explicit results; the fallback policy (initial
/// value on first bind, `decode("false")` on a later external change) is
/// applied by the bind engine, never hidden inside the codec.
pub trait ValueCodec<T> {
    /// Encode a value into wire text
    fn encode(&self, value: &T) -> Result<String, AnchorError>;

    /// Decode wire text into a value
    fn decode(&self, raw: &str) -> Result<T, AnchorError>;

    /// Whether this value clears its entry from the sink instead of being
    /// encoded (the entry is then represented by absence)
    fn clears_entry(&self, _value: &T) -> bool {
        false
    }
}

/// Generic structured-text codec backed by JSON round-tripping.
pub struct JsonCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    /// Create the default codec
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValueCodec<T> for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> Result<String, AnchorError> {
        serde_json::to_string(value).map_err(|e| AnchorError::encode(e.to_string()))
    }

    fn decode(&self, raw: &str) -> Result<T, AnchorError> {
        serde_json::from_str(raw).map_err(|e| AnchorError::decode(e.to_string()))
    }

    /// JSON `false` and `null` clear the entry, matching the falsy-value
    /// contract of the sink
    fn clears_entry(&self, value: &T) -> bool {
        matches!(
            serde_json::to_value(value),
            Ok(serde_json::Value::Bool(false)) | Ok(serde_json::Value::Null)
        )
    }
}
