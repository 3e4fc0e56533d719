//! Store registry - one bound store instance per key
//!
//! Flat process-lifetime cache with no eviction. Entries keep the binding's
//! subscription guards alive; there is no teardown API, which is an accepted
//! resource-lifetime simplification rather than an oversight.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

use contracts::{AnchorError, ObservableCell};
use mirror::MirrorSubscription;

/// One cached binding: the type-erased cell plus its live subscriptions.
pub(crate) struct BoundEntry {
    cell: Box<dyn Any>,
    _cell_sub: Box<dyn Any>,
    _mirror_sub: MirrorSubscription,
}

/// Cache mapping key -> bound store.
#[derive(Default)]
pub(crate) struct StoreRegistry {
    entries: RefCell<HashMap<String, BoundEntry>>,
}

impl StoreRegistry {
    /// Return the cached cell for `key`, if any.
    ///
    /// # Errors
    /// [`AnchorError::KeyTypeMismatch`] when the key is bound with a
    /// different value type than `T`.
    pub fn lookup<T: Clone + 'static>(
        &self,
        key: &str,
    ) -> Result<Option<ObservableCell<T>>, AnchorError> {
        match self.entries.borrow().get(key) {
            None => Ok(None),
            Some(entry) => entry
                .cell
                .downcast_ref::<ObservableCell<T>>()
                .map(|cell| Some(cell.clone()))
                .ok_or_else(|| AnchorError::key_type_mismatch(key)),
        }
    }

    /// Insert a freshly constructed binding under `key`
    pub fn register<T: Clone + 'static>(
        &self,
        key: &str,
        cell: ObservableCell<T>,
        cell_sub: contracts::Subscription<T>,
        mirror_sub: MirrorSubscription,
    ) {
        self.entries.borrow_mut().insert(
            key.to_string(),
            BoundEntry {
                cell: Box::new(cell),
                _cell_sub: Box::new(cell_sub),
                _mirror_sub: mirror_sub,
            },
        );
    }

    /// Number of cached bindings
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}
