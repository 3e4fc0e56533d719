//! Layered error definitions
//!
//! Categorized by source: codec / wire / registry / config

use thiserror::Error;

/// Unified error type
///
/// Nothing in the synchronization loop treats these as fatal: decode and
/// segment errors are recovered with the documented fallback policy at the
/// call site, not swallowed inside the codec.
#[derive(Debug, Error)]
pub enum AnchorError {
    // ===== Codec Errors =====
    /// A raw sink value failed to decode into the bound type
    #[error("decode error: {message}")]
    Decode { message: String },

    /// A value failed to encode into its wire text
    #[error("encode error: {message}")]
    Encode { message: String },

    // ===== Wire Errors =====
    /// One `&`-joined segment of the sink text is malformed
    #[error("malformed segment '{segment}': {message}")]
    Segment { segment: String, message: String },

    // ===== Registry Errors =====
    /// A key is already bound with a different value type
    #[error("key '{key}' is already bound to a different value type")]
    KeyTypeMismatch { key: String },

    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse { message: String },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },
}

impl AnchorError {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an encode error
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Create a malformed-segment error
    pub fn segment(segment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Segment {
            segment: segment.into(),
            message: message.into(),
        }
    }

    /// Create a key-type-mismatch error
    pub fn key_type_mismatch(key: impl Into<String>) -> Self {
        Self::KeyTypeMismatch { key: key.into() }
    }

    /// Create a configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }

    /// Create a configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }
}
