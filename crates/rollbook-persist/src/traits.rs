//! The [`SlotStore`] trait defining the persistence interface, plus the
//! typed load/save helpers the registry store uses.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PersistError, PersistResult};
use crate::slot::Slot;

/// Storage backend for named slots.
///
/// Implementations must be thread-safe (`Send + Sync`). A slot holds at most
/// one payload; `write` overwrites unconditionally and a missing slot reads
/// as `Ok(None)` rather than an error.
pub trait SlotStore: Send + Sync {
    /// Read the raw payload stored in a slot.
    ///
    /// Returns `Ok(None)` if nothing was ever stored there.
    fn read(&self, slot: Slot) -> PersistResult<Option<String>>;

    /// Write a payload to a slot, overwriting any prior value.
    fn write(&self, slot: Slot, payload: &str) -> PersistResult<()>;
}

impl<S: SlotStore + ?Sized> SlotStore for std::sync::Arc<S> {
    fn read(&self, slot: Slot) -> PersistResult<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: Slot, payload: &str) -> PersistResult<()> {
        (**self).write(slot, payload)
    }
}

impl<S: SlotStore + ?Sized> SlotStore for Box<S> {
    fn read(&self, slot: Slot) -> PersistResult<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: Slot, payload: &str) -> PersistResult<()> {
        (**self).write(slot, payload)
    }
}

/// Load a collection from a slot.
///
/// A missing slot yields the empty collection. So does a payload that fails
/// to parse: the malformed value is logged at warn level and discarded, the
/// recovery behavior of the original tool. I/O errors are propagated.
pub fn load_collection<T: DeserializeOwned>(
    store: &dyn SlotStore,
    slot: Slot,
) -> PersistResult<Vec<T>> {
    let Some(payload) = store.read(slot)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&payload) {
        Ok(records) => Ok(records),
        Err(err) => {
            tracing::warn!(slot = %slot, error = %err, "malformed stored payload, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize a full collection and write it to its slot.
pub fn save_collection<T: Serialize>(
    store: &dyn SlotStore,
    slot: Slot,
    records: &[T],
) -> PersistResult<()> {
    let payload = serde_json::to_string(records)
        .map_err(|e| PersistError::Serialization(e.to_string()))?;
    store.write(slot, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemorySlotStore;

    #[test]
    fn load_missing_slot_is_empty() {
        let store = InMemorySlotStore::new();
        let records: Vec<String> = load_collection(&store, Slot::Courses).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn load_malformed_payload_falls_back_to_empty() {
        let store = InMemorySlotStore::new();
        store.write(Slot::Courses, "{not json").unwrap();
        let records: Vec<String> = load_collection(&store, Slot::Courses).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = InMemorySlotStore::new();
        let records = vec!["a".to_string(), "b".to_string()];
        save_collection(&store, Slot::Students, &records).unwrap();
        let loaded: Vec<String> = load_collection(&store, Slot::Students).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn save_overwrites_prior_value() {
        let store = InMemorySlotStore::new();
        save_collection(&store, Slot::Students, &["old".to_string()]).unwrap();
        save_collection(&store, Slot::Students, &["new".to_string()]).unwrap();
        let loaded: Vec<String> = load_collection(&store, Slot::Students).unwrap();
        assert_eq!(loaded, vec!["new".to_string()]);
    }
}
