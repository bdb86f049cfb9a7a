use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::PersistResult;
use crate::slot::Slot;
use crate::traits::SlotStore;

/// In-memory, HashMap-based slot store.
///
/// Intended for tests and embedding. Payloads are held in memory behind a
/// `RwLock` and cloned on read.
pub struct InMemorySlotStore {
    slots: RwLock<HashMap<Slot, String>>,
}

impl InMemorySlotStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of slots currently holding a payload.
    pub fn len(&self) -> usize {
        self.slots.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no slot holds a payload.
    pub fn is_empty(&self) -> bool {
        self.slots.read().expect("lock poisoned").is_empty()
    }

    /// Remove all stored payloads.
    pub fn clear(&self) {
        self.slots.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemorySlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotStore for InMemorySlotStore {
    fn read(&self, slot: Slot) -> PersistResult<Option<String>> {
        let slots = self.slots.read().expect("lock poisoned");
        Ok(slots.get(&slot).cloned())
    }

    fn write(&self, slot: Slot, payload: &str) -> PersistResult<()> {
        let mut slots = self.slots.write().expect("lock poisoned");
        slots.insert(slot, payload.to_string());
        Ok(())
    }
}

impl std::fmt::Debug for InMemorySlotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySlotStore")
            .field("slot_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_slot_returns_none() {
        let store = InMemorySlotStore::new();
        assert!(store.read(Slot::Courses).unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let store = InMemorySlotStore::new();
        store.write(Slot::Courses, "[]").unwrap();
        assert_eq!(store.read(Slot::Courses).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_overwrites() {
        let store = InMemorySlotStore::new();
        store.write(Slot::Students, "old").unwrap();
        store.write(Slot::Students, "new").unwrap();
        assert_eq!(store.read(Slot::Students).unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn slots_are_independent() {
        let store = InMemorySlotStore::new();
        store.write(Slot::Courses, "courses").unwrap();
        assert!(store.read(Slot::Students).unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemorySlotStore::new();
        store.write(Slot::Courses, "x").unwrap();
        store.write(Slot::Students, "y").unwrap();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn default_creates_empty_store() {
        let store = InMemorySlotStore::default();
        assert!(store.is_empty());
    }
}
