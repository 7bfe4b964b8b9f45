use address_book::error::{PersistenceError, PersistenceResult};
use address_book::models::Directory;
use address_book::repositories::SnapshotRepository;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock snapshot repository for testing.
///
/// Keeps the saved directory in memory, can be told to fail saves, and
/// tracks method calls for verification. Clones share state, so a test can
/// keep a handle after moving one into a session.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSnapshotRepository {
    stored: Arc<Mutex<Option<Directory>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockSnapshotRepository {
    /// Create a repository with nothing stored yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `directory`.
    pub fn with_directory(directory: Directory) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(directory);
        repo
    }

    /// The last saved directory, if any.
    pub fn stored(&self) -> Option<Directory> {
        self.stored.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl SnapshotRepository for MockSnapshotRepository {
    fn load(&self) -> PersistenceResult<Directory> {
        self.track_call("load");
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, directory: &Directory) -> PersistenceResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(PersistenceError::Io {
                path: PathBuf::from("mock"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        *self.stored.lock().unwrap() = Some(directory.clone());
        Ok(())
    }
}
