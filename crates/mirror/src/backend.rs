//! SharedSink backends
//!
//! `MemorySink` stands in for the URL fragment in tests and demos;
//! `NullSink` is the degraded mode for hosts with no shared environment.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use contracts::SharedSink;

/// In-process sink backed by a plain string.
///
/// External edits are simulated with [`MemorySink::set_external`], which
/// rewrites the text and fires the registered change listeners — writes
/// through [`SharedSink::write_text`] do not, matching the contract that the
/// engine's own writes never signal themselves.
#[derive(Default)]
pub struct MemorySink {
    text: RefCell<String>,
    listeners: RefCell<Vec<Rc<dyn Fn()>>>,
    writes: Cell<u64>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Create a sink pre-seeded with text
    pub fn with_text(text: &str) -> Rc<Self> {
        let sink = Self::default();
        *sink.text.borrow_mut() = text.to_string();
        Rc::new(sink)
    }

    /// Current sink text
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Number of writes performed through [`SharedSink::write_text`]
    pub fn write_count(&self) -> u64 {
        self.writes.get()
    }

    /// Simulate an externally-originated edit: replace the text and fire the
    /// change listeners
    pub fn set_external(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        let listeners: Vec<_> = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}

impl SharedSink for MemorySink {
    fn read_text(&self) -> String {
        self.text.borrow().clone()
    }

    fn write_text(&self, text: &str) {
        self.writes.set(self.writes.get() + 1);
        *self.text.borrow_mut() = text.to_string();
    }

    fn on_external_change(&self, listener: Rc<dyn Fn()>) {
        self.listeners.borrow_mut().push(listener);
    }
}

/// No-op sink for hosts without a shared environment.
///
/// Reads are empty, writes vanish, no change signal ever fires; a store bound
/// through this sink behaves as a plain in-memory observable.
#[derive(Debug, Default)]
pub struct NullSink;

impl NullSink {
    /// Create a null sink
    pub fn new() -> Rc<Self> {
        debug!("shared environment unavailable, sink operations are no-ops");
        Rc::new(Self)
    }
}

impl SharedSink for NullSink {
    fn read_text(&self) -> String {
        String::new()
    }

    fn write_text(&self, _text: &str) {}

    fn on_external_change(&self, _listener: Rc<dyn Fn()>) {}
}
