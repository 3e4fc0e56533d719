//! SinkMirror - single source of truth for the parsed sink state

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use slab::Slab;
use tracing::{debug, instrument, trace};

use contracts::{RawValue, SharedSink, SinkMap, SinkOptions};

type MapListener = Rc<dyn Fn(&SinkMap)>;

/// Observable cache of the shared sink's key-value mapping.
///
/// All mutation flows through `pull` (external -> mirror) or `push`
/// (one binding -> sink); both leave the mapping and the sink text mutually
/// consistent before notifying subscribers.
pub struct SinkMirror {
    backend: Rc<dyn SharedSink>,
    map: RefCell<SinkMap>,
    subscribers: RefCell<Slab<MapListener>>,
    debounce: Duration,
    last_signal: Cell<Option<Instant>>,
}

impl SinkMirror {
    /// Create a mirror over `backend` and register its single
    /// external-change listener.
    ///
    /// The mapping starts empty; the first `pull` (explicit or signal-driven)
    /// populates it.
    pub fn new(backend: Rc<dyn SharedSink>, options: &SinkOptions) -> Rc<Self> {
        let mirror = Rc::new(Self {
            backend,
            map: RefCell::new(SinkMap::new()),
            subscribers: RefCell::new(Slab::new()),
            debounce: options.debounce(),
            last_signal: Cell::new(None),
        });

        let weak = Rc::downgrade(&mirror);
        mirror.backend.on_external_change(Rc::new(move || {
            if let Some(mirror) = weak.upgrade() {
                mirror.on_external_signal();
            }
        }));

        mirror
    }

    /// Re-read the sink text, replace the mapping, notify subscribers.
    ///
    /// Callable cold, before any external signal has fired.
    #[instrument(name = "mirror_pull", skip(self))]
    pub fn pull(&self) {
        let text = self.backend.read_text();
        let map = fragment::parse(&text);
        trace!(keys = map.len(), "mirror refreshed from sink");
        observability::record_pull();

        *self.map.borrow_mut() = map.clone();
        self.notify(&map);
    }

    /// Merge a single key's raw text into the mapping and write the full
    /// serialization back to the sink.
    ///
    /// Empty `raw` removes the key; every other entry is carried over
    /// byte-for-byte. An empty surviving mapping clears the sink.
    #[instrument(name = "mirror_push", skip(self, raw))]
    pub fn push(&self, key: &str, raw: &str) {
        {
            let mut map = self.map.borrow_mut();
            if raw.is_empty() {
                map.shift_remove(key);
            } else {
                map.insert(key.to_string(), RawValue::text(raw));
            }
        }

        let snapshot = self.map.borrow().clone();
        let text = fragment::serialize(&snapshot);
        self.backend.write_text(&text);
        observability::record_push();

        self.notify(&snapshot);
    }

    /// Raw value currently held for `key`
    pub fn get(&self, key: &str) -> Option<RawValue> {
        self.map.borrow().get(key).cloned()
    }

    /// Snapshot of the full mapping
    pub fn snapshot(&self) -> SinkMap {
        self.map.borrow().clone()
    }

    /// Subscribe to mapping changes.
    ///
    /// The listener receives a snapshot after every `pull` and `push`.
    /// Dropping the guard unsubscribes.
    pub fn subscribe(self: &Rc<Self>, listener: impl Fn(&SinkMap) + 'static) -> MirrorSubscription {
        let key = self.subscribers.borrow_mut().insert(Rc::new(listener));
        MirrorSubscription {
            mirror: Rc::downgrade(self),
            key,
        }
    }

    /// Leading-edge debounce: signals landing inside the window are dropped.
    ///
    /// The accepted staleness window is bounded by the debounce duration;
    /// correctness does not depend on it since every accepted signal performs
    /// a full re-parse.
    fn on_external_signal(&self) {
        let now = Instant::now();
        if self.debounce > Duration::ZERO {
            if let Some(last) = self.last_signal.get() {
                if now.duration_since(last) < self.debounce {
                    self.last_signal.set(Some(now));
                    debug!("external signal debounced");
                    observability::record_debounced();
                    return;
                }
            }
        }
        self.last_signal.set(Some(now));
        self.pull();
    }

    fn notify(&self, map: &SinkMap) {
        // Snapshot the listener list so a listener may push back into the
        // mirror while this notification is still on the stack.
        let listeners: Vec<MapListener> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        for listener in listeners {
            listener(map);
        }
    }
}

/// Guard for one mirror listener registration; unsubscribes on drop.
pub struct MirrorSubscription {
    mirror: Weak<SinkMirror>,
    key: usize,
}

impl Drop for MirrorSubscription {
    fn drop(&mut self) {
        if let Some(mirror) = self.mirror.upgrade() {
            mirror.subscribers.borrow_mut().try_remove(self.key);
        }
    }
}
