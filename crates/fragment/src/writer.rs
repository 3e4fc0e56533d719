//! Sink text serialization

use contracts::{RawValue, SinkMap};

use crate::percent;

/// Serialize a mapping to canonical sink text.
///
/// - Entries are emitted in iteration order
/// - Empty-text entries are omitted entirely (presence by absence)
/// - A bare flag serializes as the key alone, keeping re-serialization
///   idempotent
/// - An empty result is `""`, which the backend treats as clearing the sink
pub fn serialize(map: &SinkMap) -> String {
    let mut segments = Vec::with_capacity(map.len());

    for (key, value) in map {
        match value {
            RawValue::Flag => segments.push(key.clone()),
            RawValue::Text(text) => {
                if text.is_empty() {
                    continue;
                }
                segments.push(format!("{key}={}", percent::encode_value(text)));
            }
        }
    }

    segments.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_serialize_basic() {
        let mut map = SinkMap::new();
        map.insert("a".to_string(), RawValue::text("1"));
        map.insert("b".to_string(), RawValue::text("two"));
        assert_eq!(serialize(&map), "a=1&b=two");
    }

    #[test]
    fn test_empty_map_serializes_empty() {
        assert_eq!(serialize(&SinkMap::new()), "");
    }

    #[test]
    fn test_empty_text_entries_omitted() {
        let mut map = SinkMap::new();
        map.insert("keep".to_string(), RawValue::text("1"));
        map.insert("gone".to_string(), RawValue::text(""));
        assert_eq!(serialize(&map), "keep=1");
    }

    #[test]
    fn test_only_empty_entry_clears_sink() {
        let mut map = SinkMap::new();
        map.insert("gone".to_string(), RawValue::text(""));
        assert_eq!(serialize(&map), "");
    }

    #[test]
    fn test_flag_serializes_bare() {
        let mut map = SinkMap::new();
        map.insert("debug".to_string(), RawValue::Flag);
        assert_eq!(serialize(&map), "debug");
    }

    #[test]
    fn test_structural_characters_escaped() {
        let mut map = SinkMap::new();
        map.insert("q".to_string(), RawValue::text("a&b=c"));
        assert_eq!(serialize(&map), "q=a%26b%3Dc");
    }

    #[test]
    fn test_parse_serialize_round_trip() {
        let mut map = SinkMap::new();
        map.insert("page".to_string(), RawValue::text("3"));
        map.insert("debug".to_string(), RawValue::Flag);
        map.insert("msg".to_string(), RawValue::text("hello world & more"));

        let text = serialize(&map);
        assert_eq!(parse(&text), map);
    }

    #[test]
    fn test_reserialization_idempotent() {
        let text = "page=3&debug&msg=hello%20world";
        assert_eq!(serialize(&parse(text)), text);
    }
}
