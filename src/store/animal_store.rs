//! File-backed animal store
//!
//! The collection is read once at open time and kept in memory. Every
//! append rewrites the whole backing file before the record becomes
//! visible to readers, so memory and disk agree after each successful
//! append. Changes made to the file by other processes are not observed.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};

use super::errors::{StoreError, StoreResult};
use super::record::{Animal, AnimalFile, AnimalFileRef};

/// In-memory animal collection mirrored to a JSON file.
///
/// Readers share the lock. Appends hold the write lock across id
/// assignment, file write and the in-memory push, so two concurrent
/// creates can never be given the same id.
#[derive(Debug)]
pub struct AnimalStore {
    path: PathBuf,
    animals: RwLock<Vec<Animal>>,
}

impl AnimalStore {
    /// Load the collection from `path`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        let file: AnimalFile =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?;

        log_event_with_fields(
            Event::StoreLoaded,
            &[
                ("path", path.display().to_string().as_str()),
                ("records", file.animals.len().to_string().as_str()),
            ],
        );

        Ok(Self {
            path,
            animals: RwLock::new(file.animals),
        })
    }

    /// Create a data file holding an empty collection.
    ///
    /// Fails with [`StoreError::AlreadyExists`] unless `force` is set.
    pub fn init(path: &Path, force: bool) -> StoreResult<()> {
        if path.exists() && !force {
            return Err(StoreError::AlreadyExists(path.to_path_buf()));
        }
        write_collection(path, &[])?;
        log_event_with_fields(
            Event::DataInitialized,
            &[("path", path.display().to_string().as_str())],
        );
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records
    pub fn len(&self) -> StoreResult<usize> {
        self.read(|animals| animals.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Clone of the full collection in insertion order
    pub fn all(&self) -> StoreResult<Vec<Animal>> {
        self.read(|animals| animals.to_vec())
    }

    /// Run `f` against the current collection under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&[Animal]) -> R) -> StoreResult<R> {
        let animals = self.animals.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&animals))
    }

    /// Append a validated payload.
    ///
    /// The new record's id is the collection length before the append.
    /// If the file write fails the collection is left unchanged.
    ///
    /// Blocks on file I/O while holding the write lock; async callers
    /// should run it on a blocking thread.
    pub fn append(&self, payload: Value) -> StoreResult<Animal> {
        let mut animals = self.animals.write().map_err(|_| StoreError::LockPoisoned)?;

        let id = animals.len().to_string();
        let animal = Animal::from_payload(id, payload).map_err(StoreError::InvalidRecord)?;

        animals.push(animal.clone());
        if let Err(e) = write_collection(&self.path, &animals) {
            animals.pop();
            log_event_with_fields(
                Event::PersistFailed,
                &[
                    ("path", self.path.display().to_string().as_str()),
                    ("error", e.to_string().as_str()),
                ],
            );
            return Err(e);
        }

        log_event_with_fields(
            Event::AnimalCreated,
            &[("id", animal.id.as_str()), ("name", animal.name.as_str())],
        );
        Ok(animal)
    }
}

/// Overwrite `path` with `{"animals": [...]}`, creating parent directories.
fn write_collection(path: &Path, animals: &[Animal]) -> StoreResult<()> {
    let body = serde_json::to_string_pretty(&AnimalFileRef { animals })
        .map_err(StoreError::Serialize)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
    }

    fs::write(path, body).map_err(|e| StoreError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn seeded_store(dir: &TempDir) -> AnimalStore {
        let path = dir.path().join("animals.json");
        fs::write(
            &path,
            json!({
                "animals": [{
                    "id": "0",
                    "name": "Rex",
                    "species": "dog",
                    "diet": "omnivore",
                    "personalityTraits": ["Loyal", "Playful"]
                }]
            })
            .to_string(),
        )
        .unwrap();
        AnimalStore::open(&path).unwrap()
    }

    fn mia() -> Value {
        json!({
            "name": "Mia",
            "species": "cat",
            "diet": "carnivore",
            "personalityTraits": ["Independent"]
        })
    }

    fn read_file(path: &Path) -> Vec<Animal> {
        let content = fs::read_to_string(path).unwrap();
        let file: AnimalFile = serde_json::from_str(&content).unwrap();
        file.animals
    }

    #[test]
    fn test_open_loads_records() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.all().unwrap()[0].name, "Rex");
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = AnimalStore::open(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_open_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("animals.json");
        fs::write(&path, "{\"animals\": [").unwrap();
        assert!(matches!(
            AnimalStore::open(&path).unwrap_err(),
            StoreError::Corrupt { .. }
        ));
    }

    #[test]
    fn test_append_assigns_length_as_id_and_syncs_file() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let created = store.append(mia()).unwrap();
        assert_eq!(created.id, "1");
        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(read_file(store.path()), store.all().unwrap());
    }

    #[test]
    fn test_file_is_pretty_printed_collection() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        store.append(mia()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("{\n  \"animals\": ["));
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        // Replace the data file with a directory so the write fails.
        fs::remove_file(store.path()).unwrap();
        fs::create_dir(store.path()).unwrap();

        let err = store.append(mia()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("animals.json");

        AnimalStore::init(&path, false).unwrap();
        assert!(AnimalStore::open(&path).unwrap().is_empty().unwrap());

        assert!(matches!(
            AnimalStore::init(&path, false),
            Err(StoreError::AlreadyExists(_))
        ));
        AnimalStore::init(&path, true).unwrap();
    }

    #[test]
    fn test_concurrent_appends_get_distinct_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;
        use std::thread;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("animals.json");
        AnimalStore::init(&path, false).unwrap();
        let store = Arc::new(AnimalStore::open(&path).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.append(mia()).unwrap().id)
            })
            .collect();
        let ids: HashSet<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(ids.len(), 8);
        assert_eq!(read_file(&path).len(), 8);
    }
}
