// ============================================================================
// Data Space Infrastructure - In-Memory Entity Repository
// File: crates/dataspace-infrastructure/src/repository/in_memory.rs
// Description: Seeded record list mirrored into key-value storage after every write
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use dataspace_core::domain::Entity;
use dataspace_core::error::DomainError;
use dataspace_core::repositories::{EntityRepository, KeyValueStorage, RecordMutation};
use dataspace_shared::EntityId;

pub struct InMemoryRepository<E: Entity> {
    records: RwLock<Vec<E>>,
    seed: Vec<E>,
    storage: Option<Arc<dyn KeyValueStorage>>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Starts from `seed`. Without storage, writes stay in memory only.
    pub fn new(seed: Vec<E>, storage: Option<Arc<dyn KeyValueStorage>>) -> Self {
        Self {
            records: RwLock::new(seed.clone()),
            seed,
            storage,
        }
    }

    pub fn seed(&self) -> &[E] {
        &self.seed
    }

    /// Replaces the mirrored copy with the full current list. Callers hold the write
    /// guard so mirrors land in write order.
    async fn persist(&self, records: &[E]) -> Result<(), DomainError> {
        let Some(storage) = self.storage.clone() else {
            return Ok(());
        };
        let json = serde_json::to_string(records)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;
        let key = E::STORAGE_KEY;
        tokio::task::spawn_blocking(move || storage.set_item(key, &json))
            .await
            .map_err(|e| DomainError::TransientFailure(e.to_string()))?
            .map_err(|e| {
                error!("Failed to mirror {} store: {}", E::KIND, e);
                DomainError::TransientFailure(e.to_string())
            })?;
        debug!("Mirrored {} {} records", records.len(), E::KIND);
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<E>, DomainError> {
        Ok(self.records.read().await.iter().find(|e| e.id() == id).cloned())
    }

    async fn insert(&self, entity: E) -> Result<E, DomainError> {
        let mut records = self.records.write().await;
        records.push(entity.clone());
        self.persist(&records).await?;
        Ok(entity)
    }

    async fn modify(&self, id: &str, mutation: RecordMutation<E>) -> Result<Option<E>, DomainError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|e| e.id() == id) else {
            return Ok(None);
        };
        mutation(record);
        let updated = record.clone();
        self.persist(&records).await?;
        Ok(Some(updated))
    }

    async fn remove(&self, id: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|e| e.id() == id) else {
            return Ok(false);
        };
        records.remove(index);
        self.persist(&records).await?;
        Ok(true)
    }

    async fn remove_many(&self, ids: &[EntityId]) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|e| !ids.iter().any(|id| id == e.id()));
        let removed = before - records.len();
        if removed > 0 {
            self.persist(&records).await?;
        }
        Ok(removed)
    }

    async fn initialize_from_storage(&self) -> Result<(), DomainError> {
        let Some(storage) = self.storage.clone() else {
            return Ok(());
        };

        let key = E::STORAGE_KEY;
        let read = tokio::task::spawn_blocking(move || storage.get_item(key))
            .await
            .map_err(|e| DomainError::TransientFailure(e.to_string()))?;
        let stored = match read {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                debug!("No mirrored {} store, keeping current records", E::KIND);
                return Ok(());
            }
            Err(e) => {
                warn!("Cannot read mirrored {} store: {}", E::KIND, e);
                return Ok(());
            }
        };

        let mut records = self.records.write().await;
        match serde_json::from_str::<Vec<E>>(&stored) {
            Ok(loaded) => {
                info!("Loaded {} {} records from storage", loaded.len(), E::KIND);
                *records = loaded;
            }
            Err(e) => {
                warn!("Corrupt mirrored {} store, reverting to seed: {}", E::KIND, e);
                *records = self.seed.clone();
            }
        }
        Ok(())
    }
}
