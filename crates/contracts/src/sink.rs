//! SharedSink trait - the external text location collaborator
//!
//! Abstracts the globally-addressable text blob the engine synchronizes with
//! (a URL fragment in the reference deployment). Resolved once at context
//! construction and threaded through explicitly; no ambient globals.

use std::rc::Rc;

/// External shared text location.
///
/// An unavailable environment is modeled by an implementation whose
/// operations are no-ops, not by probing for globals at call sites.
pub trait SharedSink {
    /// Current sink text; `""` when the sink is empty or absent
    fn read_text(&self) -> String;

    /// Replace the full sink text; `""` clears the sink
    fn write_text(&self, text: &str);

    /// Register a listener for externally-originated sink changes.
    ///
    /// The mirror registers exactly one listener per sink. Writes performed
    /// through [`SharedSink::write_text`] must not fire it.
    fn on_external_change(&self, listener: Rc<dyn Fn()>);
}
