// SPDX-License-Identifier: MPL-2.0
//! Locale-change listeners.
//!
//! Callbacks run synchronously on the caller's thread, in registration order.
//! A callback may subscribe or dispose listeners while it runs; such changes
//! take effect from the next notification.

use super::locale::Locale;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback = Rc<RefCell<dyn FnMut(&Locale)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

/// Registry of callbacks notified with the new locale after every switch.
#[derive(Clone, Default)]
pub struct LocaleListeners {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for LocaleListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleListeners")
            .field("len", &self.len())
            .finish()
    }
}

impl LocaleListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` and returns the handle that removes it.
    pub fn subscribe(&self, callback: impl FnMut(&Locale) + 'static) -> Disposer {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Rc::new(RefCell::new(callback))));

        Disposer {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Calls every registered callback with `locale`.
    pub fn notify(&self, locale: &Locale) {
        let snapshot: Vec<Callback> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in snapshot {
            // A callback that re-enters `notify` is not called recursively.
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(locale);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Removes the listener it was returned for.
///
/// Dropping the handle leaves the listener registered.
#[must_use = "dropping a Disposer keeps the listener registered forever"]
#[derive(Debug)]
pub struct Disposer {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Disposer {
    /// Unregisters the listener. Calling it again is a no-op.
    pub fn dispose(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}
