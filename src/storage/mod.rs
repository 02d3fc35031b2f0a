//! Progress Storage - named string slots
//!
//! The ledger only needs "read slot" and "write slot". Browser builds use
//! `window.localStorage`; native builds and tests use `MemoryStore`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;

pub trait ProgressStore {
    /// Slot contents, `None` when the slot was never written or is unreadable
    fn read(&self, slot: &str) -> Option<String>;

    /// Synchronous write; done when this returns
    fn write(&mut self, slot: &str, value: &str) -> Result<(), String>;
}

#[derive(Default)]
struct MemorySlots {
    slots: HashMap<String, String>,
    read_only: bool,
}

/// In-process store. Clones share the same slots, so a test can hand one
/// clone to a ledger and inspect (or reopen) through another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemorySlots>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slot access
    pub fn get(&self, slot: &str) -> Option<String> {
        self.inner.borrow().slots.get(slot).cloned()
    }

    pub fn set(&self, slot: &str, value: &str) {
        self.inner.borrow_mut().slots.insert(slot.to_string(), value.to_string());
    }

    /// Reject every write (full disk, private browsing, ...)
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
    }
}

impl ProgressStore for MemoryStore {
    fn read(&self, slot: &str) -> Option<String> {
        self.get(slot)
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<(), String> {
        let mut inner = self.inner.borrow_mut();
        if inner.read_only {
            return Err(format!("store is read-only, dropped write to {}", slot));
        }
        inner.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

/// Platform default: localStorage in the browser, memory elsewhere
pub fn default_store() -> Box<dyn ProgressStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(WebStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(MemoryStore::new())
    }
}
