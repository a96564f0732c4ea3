//! Entity repository trait (port)

use async_trait::async_trait;

use dataspace_shared::EntityId;

use crate::domain::Entity;
use crate::error::DomainError;

/// In-place change applied to a single record under the store's write lock.
pub type RecordMutation<E> = Box<dyn FnOnce(&mut E) + Send>;

/// Store of one entity kind. Missing ids are reported as `None`/`false`/skipped,
/// never as errors; errors mean the store or its mirror failed.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<E>, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<E>, DomainError>;
    async fn insert(&self, entity: E) -> Result<E, DomainError>;
    async fn modify(&self, id: &str, mutation: RecordMutation<E>) -> Result<Option<E>, DomainError>;
    async fn remove(&self, id: &str) -> Result<bool, DomainError>;
    /// Removes every listed id in a single pass and returns how many were present.
    async fn remove_many(&self, ids: &[EntityId]) -> Result<usize, DomainError>;
    /// Replaces the records with the mirrored copy, or the seed when the copy is unreadable.
    async fn initialize_from_storage(&self) -> Result<(), DomainError>;
}
