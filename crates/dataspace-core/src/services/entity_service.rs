// ============================================================================
// Data Space Core - Entity Service
// File: crates/dataspace-core/src/services/entity_service.rs
// ============================================================================
//! Mock CRUD service shared by every entity kind

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use dataspace_shared::{new_id, EntityId};

use crate::domain::{Entity, EntityPatch};
use crate::error::DomainError;
use crate::repositories::EntityRepository;
use crate::services::latency::{Latency, Operation};

/// CRUD contract over one entity store, with simulated latency before each call resolves.
///
/// Dropping a returned future before it resolves discards the result; nothing is retried.
pub struct EntityService<E: Entity, R: EntityRepository<E>> {
    repo: Arc<R>,
    latency: Arc<dyn Latency>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, R: EntityRepository<E>> Clone for EntityService<E, R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            latency: Arc::clone(&self.latency),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, R: EntityRepository<E>> EntityService<E, R> {
    pub fn new(repo: Arc<R>, latency: Arc<dyn Latency>) -> Self {
        Self {
            repo,
            latency,
            _entity: PhantomData,
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    async fn simulate(&self, operation: Operation) {
        self.latency
            .pause(operation, E::LATENCY.for_operation(operation))
            .await;
    }

    pub async fn get_all(&self) -> Result<Vec<E>, DomainError> {
        self.simulate(Operation::GetAll).await;
        let records = self.repo.find_all().await?;
        debug!("Listed {} {} records", records.len(), E::KIND);
        Ok(records)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<E>, DomainError> {
        self.simulate(Operation::GetById).await;
        let found = self.repo.find_by_id(id).await?;
        if found.is_none() {
            debug!("{} not found: {}", E::KIND, id);
        }
        Ok(found)
    }

    /// Assigns a fresh id and `createdAt`, then stores the record.
    pub async fn create(&self, draft: E::Draft) -> Result<E, DomainError> {
        self.simulate(Operation::Create).await;
        let entity = E::from_draft(new_id(E::ID_PREFIX), Utc::now(), draft);
        let created = self.repo.insert(entity).await?;
        info!("Created {}: {}", E::KIND, created.id());
        Ok(created)
    }

    /// Merges the provided fields into the stored record; `None` when the id is unknown.
    pub async fn update(&self, patch: E::Patch) -> Result<Option<E>, DomainError> {
        self.simulate(Operation::Update).await;
        let id = patch.id().to_string();
        let now = Utc::now();
        let updated = self
            .repo
            .modify(&id, Box::new(move |entity: &mut E| entity.apply_patch(patch, now)))
            .await?;

        match &updated {
            Some(_) => info!("Updated {}: {}", E::KIND, id),
            None => warn!("Update skipped, {} not found: {}", E::KIND, id),
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        self.simulate(Operation::Delete).await;
        let removed = self.repo.remove(id).await?;
        if removed {
            info!("Deleted {}: {}", E::KIND, id);
        } else {
            debug!("Delete skipped, {} not found: {}", E::KIND, id);
        }
        Ok(removed)
    }

    /// Removes all matching records in one step; unknown ids are skipped.
    pub async fn batch_delete(&self, ids: &[EntityId]) -> Result<usize, DomainError> {
        self.simulate(Operation::BatchDelete).await;
        let removed = self.repo.remove_many(ids).await?;
        info!("Batch deleted {} of {} requested {} records", removed, ids.len(), E::KIND);
        Ok(removed)
    }

    pub async fn initialize_from_storage(&self) -> Result<(), DomainError> {
        self.repo.initialize_from_storage().await
    }
}
