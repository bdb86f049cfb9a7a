use std::io;
use std::path::{Path, PathBuf};

use crate::error::PersistResult;
use crate::slot::Slot;
use crate::traits::SlotStore;

/// File-backed slot store: one `<slot>.json` file per slot under a data
/// directory.
///
/// The durable stand-in for the browser local storage the original tool
/// used. The directory is created on first write; a missing directory or
/// file reads as an empty slot.
pub struct JsonFileSlotStore {
    dir: PathBuf,
}

impl JsonFileSlotStore {
    /// Create a store rooted at `dir`. The directory is not created until
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.dir.join(slot.file_name())
    }
}

impl SlotStore for JsonFileSlotStore {
    fn read(&self, slot: Slot) -> PersistResult<Option<String>> {
        match std::fs::read_to_string(self.slot_path(slot)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, slot: Slot, payload: &str) -> PersistResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(slot);
        std::fs::write(&path, payload)?;
        tracing::debug!(slot = %slot, path = %path.display(), "wrote slot");
        Ok(())
    }
}

impl std::fmt::Debug for JsonFileSlotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileSlotStore")
            .field("dir", &self.dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_before_any_write_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileSlotStore::new(tmp.path().join("data"));
        assert!(store.read(Slot::Courses).unwrap().is_none());
    }

    #[test]
    fn write_creates_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let store = JsonFileSlotStore::new(&dir);
        store.write(Slot::Courses, "[]").unwrap();
        assert!(dir.join("courses.json").is_file());
        assert_eq!(store.read(Slot::Courses).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileSlotStore::new(tmp.path());
        store.write(Slot::Students, "old").unwrap();
        store.write(Slot::Students, "new").unwrap();
        assert_eq!(store.read(Slot::Students).unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn two_stores_over_same_dir_share_data() {
        let tmp = tempfile::tempdir().unwrap();
        let a = JsonFileSlotStore::new(tmp.path());
        a.write(Slot::CourseTypes, "[1,2]").unwrap();
        let b = JsonFileSlotStore::new(tmp.path());
        assert_eq!(
            b.read(Slot::CourseTypes).unwrap().as_deref(),
            Some("[1,2]")
        );
    }
}
