mod json_snapshot_repository;
mod traits;

pub use json_snapshot_repository::{JsonSnapshotRepository, SNAPSHOT_VERSION};
pub use traits::SnapshotRepository;
