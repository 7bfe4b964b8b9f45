use crate::error::{PersistenceError, PersistenceResult};
use crate::models::{ContactRecord, Directory};
use crate::repositories::traits::SnapshotRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot layout version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk form of a directory.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    records: Vec<ContactRecord>,
}

/// Snapshot repository backed by a single pretty-printed JSON file.
///
/// Every save rewrites the file in full.
#[derive(Debug, Clone)]
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    /// Create a repository storing its snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self) -> PersistenceResult<Directory> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No snapshot at {}, starting with an empty address book",
                    self.path.display()
                );
                return Ok(Directory::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|source| PersistenceError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                path: self.path.clone(),
                found: snapshot.version,
            });
        }

        let directory = Directory::from_records(snapshot.records);
        tracing::info!(
            "Loaded {} contacts from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> PersistenceResult<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            records: directory.iter().cloned().collect(),
        };
        let json =
            serde_json::to_string_pretty(&snapshot).map_err(|source| PersistenceError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        tracing::info!(
            "Saved {} contacts to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_directory() -> Directory {
        let mut ann = ContactRecord::new("Ann").unwrap();
        ann.add_phone("0501234567").unwrap();
        ann.add_phone("0671111111").unwrap();
        ann.set_birthday("29.02.2000").unwrap();

        let mut bob = ContactRecord::new("Bob").unwrap();
        bob.add_phone("0939999999").unwrap();

        Directory::from_records(vec![ann, bob, ContactRecord::new("Cid").unwrap()])
    }

    #[test]
    fn test_load_missing_snapshot_is_empty() {
        let temp = TempDir::new().unwrap();
        let repo = JsonSnapshotRepository::new(temp.path().join("addressbook.json"));

        let directory = repo.load().unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let repo = JsonSnapshotRepository::new(temp.path().join("addressbook.json"));
        let directory = sample_directory();

        repo.save(&directory).unwrap();
        let loaded = repo.load().unwrap();

        assert_eq!(loaded, directory);
        let names: Vec<_> = loaded.iter().map(ContactRecord::name).collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let temp = TempDir::new().unwrap();
        let repo = JsonSnapshotRepository::new(temp.path().join("addressbook.json"));

        repo.save(&sample_directory()).unwrap();
        repo.save(&Directory::new()).unwrap();

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("book.json");
        let repo = JsonSnapshotRepository::new(&path);

        repo.save(&sample_directory()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_snapshot_layout() {
        let temp = TempDir::new().unwrap();
        let repo = JsonSnapshotRepository::new(temp.path().join("addressbook.json"));
        repo.save(&sample_directory()).unwrap();

        let raw = fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["records"][0]["name"], "Ann");
        assert_eq!(value["records"][0]["phones"][1], "0671111111");
        assert_eq!(value["records"][0]["birthday"], "29.02.2000");
        assert!(value["records"][2]["birthday"].is_null());
    }

    #[test]
    fn test_load_corrupt_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("addressbook.json");
        fs::write(&path, "not json at all").unwrap();

        let result = JsonSnapshotRepository::new(&path).load();
        assert!(matches!(result, Err(PersistenceError::Corrupt { .. })));
    }

    #[test]
    fn test_load_rejects_invalid_phone_in_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("addressbook.json");
        fs::write(
            &path,
            r#"{"version":1,"records":[{"name":"Ann","phones":["123"],"birthday":null}]}"#,
        )
        .unwrap();

        let result = JsonSnapshotRepository::new(&path).load();
        assert!(matches!(result, Err(PersistenceError::Corrupt { .. })));
    }

    #[test]
    fn test_load_unsupported_version() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("addressbook.json");
        fs::write(&path, r#"{"version":42,"records":[]}"#).unwrap();

        let result = JsonSnapshotRepository::new(&path).load();
        assert!(matches!(
            result,
            Err(PersistenceError::UnsupportedVersion { found: 42, .. })
        ));
    }

    #[test]
    fn test_load_directory_path_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = JsonSnapshotRepository::new(temp.path()).load();
        assert!(matches!(result, Err(PersistenceError::Io { .. })));
    }
}
