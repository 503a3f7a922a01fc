//! Synchronous, same-thread notifications.
//!
//! A [`Signal`] keeps an ordered list of handlers. Emitting calls every
//! handler that is still connected, in connection order. Handlers may connect
//! or disconnect (including themselves) while an emission is in progress; a
//! handler disconnected mid-emission is not called afterwards.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Identifies one connection to a [`Signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

struct Slot<T> {
    id: ConnectionId,
    connected: Cell<bool>,
    handler: Box<dyn Fn(&T)>,
}

/// Observer list with explicit connect and disconnect.
pub struct Signal<T> {
    slots: RefCell<Vec<Rc<Slot<T>>>>,
    next_id: Cell<u64>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Connect a handler, returning the id used to disconnect it.
    pub fn connect<F>(&self, handler: F) -> ConnectionId
    where
        F: Fn(&T) + 'static,
    {
        let id = ConnectionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.slots.borrow_mut().push(Rc::new(Slot {
            id,
            connected: Cell::new(true),
            handler: Box::new(handler),
        }));
        id
    }

    /// Disconnect a handler. Returns false if it was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let mut slots = self.slots.borrow_mut();
        match slots.iter().position(|slot| slot.id == id) {
            Some(index) => {
                slots.remove(index).connected.set(false);
                true
            }
            None => false,
        }
    }

    /// Disconnect every handler.
    pub fn disconnect_all(&self) {
        for slot in self.slots.borrow_mut().drain(..) {
            slot.connected.set(false);
        }
    }

    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.slots.borrow().iter().any(|slot| slot.id == id)
    }

    pub fn handler_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Call every connected handler with `value`.
    pub fn emit(&self, value: &T) {
        // Snapshot so handlers can modify the list while we iterate.
        let snapshot: Vec<Rc<Slot<T>>> = self.slots.borrow().clone();
        for slot in snapshot {
            if slot.connected.get() {
                (slot.handler)(value);
            }
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.handler_count())
            .finish()
    }
}
