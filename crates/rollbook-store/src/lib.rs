//! The Rollbook registry store.
//!
//! [`Registry`] owns the four entity collections (course types, courses,
//! course offerings, students) and is the only place records are created,
//! mutated, or destroyed. It loads its collections from a
//! [`SlotStore`](rollbook_persist::SlotStore) at startup and mirrors every
//! mutated collection back to its slot before the mutation returns.
//!
//! # Design Rules
//!
//! 1. Collections are insertion-ordered; order is display order.
//! 2. Referential integrity is maintained by cascading delete, never by
//!    rejecting dangling references on insert.
//! 3. Not-found is not an error: lookups return `Option` or empty, updates
//!    and deletes of absent ids are no-ops reported via `bool`.
//! 4. Persistence failures are surfaced as [`StoreError::Persist`]. The
//!    original tool dropped them silently; propagating is a deliberate
//!    strengthening. The in-memory mutation stays in place on a failed
//!    write — the mirror is behind, never ahead, and catches up on the
//!    next successful write of that slot.
//! 5. Every operation is one atomic transition between consistent
//!    snapshots; there is a single caller thread and no interior locking.

pub mod error;
pub mod registry;
pub mod summary;

pub use error::{StoreError, StoreResult};
pub use registry::Registry;
pub use summary::{CourseTypeBreakdown, MostPopularOffering, Summary};

// Re-export the record types so consumers need only this crate.
pub use rollbook_types::{Course, CourseOffering, CourseType, RecordId, Student};
