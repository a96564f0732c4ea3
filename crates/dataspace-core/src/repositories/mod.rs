//! Repository traits (ports)

pub mod entity_repository;
pub mod storage;

pub use entity_repository::{EntityRepository, RecordMutation};
pub use storage::{KeyValueStorage, StorageError};
