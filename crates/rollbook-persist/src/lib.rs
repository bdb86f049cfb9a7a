//! Key-value persistence for the Rollbook course registry.
//!
//! The registry store mirrors each of its four collections to a named slot
//! after every mutation. This crate defines the slot names, the storage
//! interface, and the backends that implement it. The stored payload is
//! always the full collection serialized as JSON, overwriting any prior
//! value for that slot (the local-storage model of the original tool).
//!
//! # Storage Backends
//!
//! All backends implement the [`SlotStore`] trait:
//!
//! - [`InMemorySlotStore`] — `HashMap`-based store for tests and embedding
//! - [`JsonFileSlotStore`] — one `<slot>.json` file per slot under a data
//!   directory
//!
//! # Design Rules
//!
//! 1. A slot holds at most one payload; writes overwrite.
//! 2. A missing slot is not an error — it reads as `None`.
//! 3. A payload that fails to parse falls back to the empty collection
//!    (logged at warn level); I/O errors are propagated, never swallowed.
//! 4. The store never interprets payloads beyond JSON — it is a pure
//!    key-value store.

pub mod error;
pub mod file;
pub mod memory;
pub mod slot;
pub mod traits;

pub use error::{PersistError, PersistResult};
pub use file::JsonFileSlotStore;
pub use memory::InMemorySlotStore;
pub use slot::Slot;
pub use traits::{load_collection, save_collection, SlotStore};
