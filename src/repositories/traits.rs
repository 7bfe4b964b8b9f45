use crate::error::PersistenceResult;
use crate::models::Directory;

/// Repository for persisting the whole directory as one snapshot.
///
/// Provides abstraction over snapshot storage, enabling different
/// implementations (JSON file, in-memory mock).
pub trait SnapshotRepository {
    /// Load the stored directory.
    ///
    /// A repository with nothing stored yet yields an empty directory.
    fn load(&self) -> PersistenceResult<Directory>;

    /// Replace the stored snapshot with `directory`.
    fn save(&self, directory: &Directory) -> PersistenceResult<()>;
}
