//! Test doubles for service tests

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use dataspace_shared::EntityId;

use crate::domain::Entity;
use crate::error::DomainError;
use crate::repositories::{EntityRepository, RecordMutation};
use crate::services::latency::{Latency, Operation};

#[derive(Default)]
pub struct RecordingLatency {
    calls: Mutex<Vec<(Operation, Duration)>>,
}

impl RecordingLatency {
    pub fn calls(&self) -> Vec<(Operation, Duration)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Latency for RecordingLatency {
    async fn pause(&self, operation: Operation, duration: Duration) {
        self.calls.lock().unwrap().push((operation, duration));
    }
}

/// Vec-backed store without a storage mirror.
pub struct VecRepository<E> {
    records: Mutex<Vec<E>>,
    writes: Mutex<usize>,
}

impl<E: Entity> VecRepository<E> {
    pub fn new(seed: Vec<E>) -> Self {
        Self {
            records: Mutex::new(seed),
            writes: Mutex::new(0),
        }
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn touch(&self) {
        *self.writes.lock().unwrap() += 1;
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for VecRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<E>, DomainError> {
        Ok(self.records.lock().unwrap().iter().find(|e| e.id() == id).cloned())
    }

    async fn insert(&self, entity: E) -> Result<E, DomainError> {
        self.records.lock().unwrap().push(entity.clone());
        self.touch();
        Ok(entity)
    }

    async fn modify(&self, id: &str, mutation: RecordMutation<E>) -> Result<Option<E>, DomainError> {
        let updated = {
            let mut records = self.records.lock().unwrap();
            records.iter_mut().find(|e| e.id() == id).map(|e| {
                mutation(e);
                e.clone()
            })
        };
        if updated.is_some() {
            self.touch();
        }
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<bool, DomainError> {
        let removed = {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|e| e.id() != id);
            records.len() != before
        };
        if removed {
            self.touch();
        }
        Ok(removed)
    }

    async fn remove_many(&self, ids: &[EntityId]) -> Result<usize, DomainError> {
        let removed = {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|e| !ids.iter().any(|id| id == e.id()));
            before - records.len()
        };
        if removed > 0 {
            self.touch();
        }
        Ok(removed)
    }

    async fn initialize_from_storage(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
