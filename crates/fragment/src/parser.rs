//! Sink text parsing

use tracing::warn;

use contracts::{RawValue, SinkMap};

use crate::percent;

/// Parse sink text into an ordered key-value mapping.
///
/// - Segments are `&`-separated; empty segments are skipped
/// - Each segment splits on the FIRST `=` only, so values may contain `=`
/// - A segment with no `=` yields a bare presence flag
/// - A segment whose value fails percent-decoding is dropped with a
///   diagnostic; the rest of the text still parses
/// - A duplicate key keeps its original position with the later value
pub fn parse(text: &str) -> SinkMap {
    let mut map = SinkMap::new();

    for segment in text.split('&') {
        if segment.is_empty() {
            continue;
        }

        match segment.split_once('=') {
            None => {
                map.insert(segment.to_string(), RawValue::Flag);
            }
            Some((key, raw_value)) => {
                if key.is_empty() {
                    continue;
                }
                match percent::decode_value(raw_value) {
                    Ok(value) => {
                        map.insert(key.to_string(), RawValue::text(value.into_owned()));
                    }
                    Err(error) => {
                        warn!(segment, %error, "dropping malformed sink segment");
                    }
                }
            }
        }
    }

    map
}
