//! Simulated network latency

use async_trait::async_trait;
use std::time::Duration;

use dataspace_shared::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
    BatchDelete,
}

/// Delay applied before each service operation resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub batch_delete: Duration,
}

impl LatencyProfile {
    pub const STANDARD: LatencyProfile = LatencyProfile {
        get_all: Duration::from_millis(LATENCY_LIST_MS),
        get_by_id: Duration::from_millis(LATENCY_GET_MS),
        create: Duration::from_millis(LATENCY_CREATE_MS),
        update: Duration::from_millis(LATENCY_UPDATE_MS),
        delete: Duration::from_millis(LATENCY_DELETE_MS),
        batch_delete: Duration::from_millis(LATENCY_BATCH_DELETE_MS),
    };

    pub const USERS: LatencyProfile = LatencyProfile {
        get_all: Duration::from_millis(LATENCY_USER_LIST_MS),
        get_by_id: Duration::from_millis(LATENCY_USER_GET_MS),
        ..LatencyProfile::STANDARD
    };

    pub fn for_operation(&self, operation: Operation) -> Duration {
        match operation {
            Operation::GetAll => self.get_all,
            Operation::GetById => self.get_by_id,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
            Operation::BatchDelete => self.batch_delete,
        }
    }
}

/// Injectable delay so tests never wait on real timers.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn pause(&self, operation: Operation, duration: Duration);
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn pause(&self, _operation: Operation, _duration: Duration) {}
}
