//! Percent escaping for sink values

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use contracts::AnchorError;

/// Bytes escaped in serialized values: the structural characters of the wire
/// format plus whitespace. Non-ASCII bytes are always escaped.
const VALUE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'&')
    .add(b'=')
    .add(b'%')
    .add(b'#')
    .add(b'+')
    .add(b'"');

/// Escape a value for embedding in the sink text
pub fn encode_value(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, VALUE_SET).into()
}

/// Unescape a value read from the sink text.
///
/// # Errors
/// Returns a segment error when the decoded bytes are not valid UTF-8.
pub fn decode_value(raw: &str) -> Result<Cow<'_, str>, AnchorError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| AnchorError::segment(raw, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_characters_escaped() {
        assert_eq!(encode_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_value("50%"), "50%25");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(encode_value("hello-world_42"), "hello-world_42");
    }

    #[test]
    fn test_round_trip() {
        let original = "a&b=c #50% +x\"";
        let encoded = encode_value(original).into_owned();
        assert_eq!(decode_value(&encoded).unwrap(), original);
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        // %FF is not valid UTF-8 on its own
        assert!(decode_value("%FF").is_err());
    }
}
