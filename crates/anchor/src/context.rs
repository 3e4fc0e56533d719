//! SinkContext - bind engine and loop suppression

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, instrument, warn};

use contracts::{AnchorError, ObservableCell, RawValue, SharedSink, SinkOptions, ValueCodec};
use mirror::SinkMirror;

use crate::registry::StoreRegistry;

/// Literal decoded when an external change for a bound key cannot be decoded,
/// and when the key disappears from the sink
const FALLBACK_TEXT: &str = "false";

/// One shared sink plus its mirror and store registry.
///
/// Logically a singleton per running process, but constructed explicitly so
/// tests can run multiple independent sinks side by side.
pub struct SinkContext {
    mirror: Rc<SinkMirror>,
    registry: StoreRegistry,
}

impl SinkContext {
    /// Create a context over a sink backend
    pub fn new(backend: Rc<dyn SharedSink>, options: &SinkOptions) -> Self {
        Self {
            mirror: SinkMirror::new(backend, options),
            registry: StoreRegistry::default(),
        }
    }

    /// Create a context with default options
    pub fn with_defaults(backend: Rc<dyn SharedSink>) -> Self {
        Self::new(backend, &SinkOptions::default())
    }

    /// The sink mirror backing this context
    pub fn mirror(&self) -> &Rc<SinkMirror> {
        &self.mirror
    }

    /// Number of keys currently bound
    pub fn bound_count(&self) -> usize {
        self.registry.len()
    }

    /// Bind `key` to an observable cell synchronized with the sink.
    ///
    /// Idempotent per key: a second call returns the identical cached cell and
    /// ignores `initial` and `codec` (first binder wins). The starting value
    /// is the decoded sink value when present and decodable, otherwise
    /// `initial`. Construction may push once before returning, when the
    /// resolved value differs from what the sink holds.
    ///
    /// # Errors
    /// [`AnchorError::KeyTypeMismatch`] when `key` is already bound with a
    /// different value type.
    #[instrument(name = "anchor_bind", skip(self, initial, codec))]
    pub fn bind<T, C>(
        &self,
        key: &str,
        initial: T,
        codec: C,
    ) -> Result<ObservableCell<T>, AnchorError>
    where
        T: Clone + 'static,
        C: ValueCodec<T> + 'static,
    {
        if let Some(cell) = self.registry.lookup::<T>(key)? {
            debug!(key, "key already bound, returning cached store");
            return Ok(cell);
        }

        observability::record_bind(key);
        let codec = Rc::new(codec);
        self.mirror.pull();

        // Baseline captured before wiring subscriptions, so the immediate
        // subscribe-echo compares against the sink state rather than itself.
        let baseline = raw_of(self.mirror.get(key).as_ref());
        let start = match &baseline {
            Some(raw) => match codec.decode(raw) {
                Ok(value) => value,
                Err(error) => {
                    warn!(key, %error, "sink value failed to decode, using initial value");
                    observability::record_decode_failure(key);
                    initial
                }
            },
            None => initial,
        };

        // The raw text this binding last synchronized with. Shared by both
        // subscriptions; comparing against it on BOTH directions is the loop
        // breaker, independent of notification order across keys.
        let last_raw: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(baseline));
        let cell = ObservableCell::new(start);

        // Local -> sink. Write-only toward the sink; never re-applies the
        // value back into the cell.
        let cell_sub = {
            let codec = Rc::clone(&codec);
            let last_raw = Rc::clone(&last_raw);
            let sink_mirror = Rc::clone(&self.mirror);
            let key = key.to_string();
            cell.subscribe(move |value| {
                let candidate = match encoded_candidate(codec.as_ref(), value) {
                    Ok(candidate) => candidate,
                    Err(error) => {
                        warn!(key = %key, %error, "value failed to encode, sink left unchanged");
                        return;
                    }
                };
                if *last_raw.borrow() == candidate {
                    return;
                }
                *last_raw.borrow_mut() = candidate.clone();
                sink_mirror.push(&key, candidate.as_deref().unwrap_or(""));
            })
        };

        // Sink -> local. An unchanged raw value is ignored, which is what
        // stops a push from round-tripping back onto the cell that caused it.
        let mirror_sub = {
            let codec = Rc::clone(&codec);
            let last_raw = Rc::clone(&last_raw);
            let cell = cell.clone();
            let key = key.to_string();
            self.mirror.subscribe(move |map| {
                let raw = raw_of(map.get(&key));
                if *last_raw.borrow() == raw {
                    return;
                }
                *last_raw.borrow_mut() = raw.clone();

                let target = raw.as_deref().unwrap_or(FALLBACK_TEXT);
                let value = match codec.decode(target) {
                    Ok(value) => value,
                    Err(error) => {
                        warn!(key = %key, %error, "external value failed to decode, applying fallback");
                        observability::record_decode_failure(&key);
                        match codec.decode(FALLBACK_TEXT) {
                            Ok(value) => value,
                            Err(error) => {
                                warn!(key = %key, %error, "fallback failed to decode, keeping current value");
                                return;
                            }
                        }
                    }
                };
                cell.set(value);
            })
        };

        self.registry.register(key, cell.clone(), cell_sub, mirror_sub);
        Ok(cell)
    }
}

/// Canonical raw form of a mapping entry: absence and empty text are the same
/// state, and a bare flag reads as the literal `true`.
fn raw_of(value: Option<&RawValue>) -> Option<String> {
    match value {
        None => None,
        Some(value) if value.is_empty_text() => None,
        Some(value) => Some(value.decode_input().to_string()),
    }
}

/// Wire text a value would occupy in the sink; `None` clears the entry
fn encoded_candidate<T>(
    codec: &dyn ValueCodec<T>,
    value: &T,
) -> Result<Option<String>, AnchorError> {
    if codec.clears_entry(value) {
        return Ok(None);
    }
    let encoded = codec.encode(value)?;
    Ok(if encoded.is_empty() { None } else { Some(encoded) })
}
