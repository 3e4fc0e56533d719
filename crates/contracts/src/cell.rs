//! ObservableCell - the reactive store collaborator
//!
//! A mutable cell that notifies subscribers synchronously on every write,
//! including the write that created the subscription. Cells are cheap
//! `Rc`-backed handles: cloning shares the same underlying cell, and two
//! handles compare identical via [`ObservableCell::ptr_eq`].
//!
//! Listeners are stored as `Rc<dyn Fn(&T)>` so a listener may re-enter
//! `set` on the same cell without aliasing a mutable borrow; subscription
//! slots are keyed through a [`Slab`] so dropping a [`Subscription`] guard
//! removes exactly its own listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slab::Slab;

type Listener<T> = Rc<dyn Fn(&T)>;

struct CellInner<T> {
    value: RefCell<T>,
    listeners: RefCell<Slab<Listener<T>>>,
}

/// Single-threaded observable value cell.
pub struct ObservableCell<T> {
    inner: Rc<CellInner<T>>,
}

impl<T> Clone for ObservableCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> ObservableCell<T> {
    /// Create a cell holding `value`
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(CellInner {
                value: RefCell::new(value),
                listeners: RefCell::new(Slab::new()),
            }),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replace the value and notify every subscriber synchronously
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Subscribe to value changes.
    ///
    /// The listener is invoked immediately with the current value, then once
    /// per subsequent `set`. Dropping the returned guard unsubscribes.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription<T> {
        let listener: Listener<T> = Rc::new(listener);
        let key = self
            .inner
            .listeners
            .borrow_mut()
            .insert(Rc::clone(&listener));

        // The borrow is released before calling out so the listener may
        // immediately write back into the cell.
        let snapshot = self.inner.value.borrow().clone();
        listener(&snapshot);

        Subscription {
            cell: Rc::downgrade(&self.inner),
            key,
        }
    }

    /// Whether two handles refer to the same underlying cell
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self) {
        // Snapshot value and listener list first: a listener that re-enters
        // `set` or `subscribe` must not invalidate this iteration.
        let snapshot = self.inner.value.borrow().clone();
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        for listener in listeners {
            listener(&snapshot);
        }
    }
}

/// Guard for one listener registration; unsubscribes on drop.
pub struct Subscription<T> {
    cell: Weak<CellInner<T>>,
    key: usize,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.cell.upgrade() {
            inner.listeners.borrow_mut().try_remove(self.key);
        }
    }
}
