//! Contract shared by every record kept in a mock entity store

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use dataspace_shared::EntityId;

use crate::services::latency::LatencyProfile;

/// A flat record with a string id, created from a draft and merged with partial patches.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Create input; the store assigns `id` and `createdAt`.
    type Draft: Send + 'static;
    /// Partial update input; absent fields are left unchanged.
    type Patch: EntityPatch;

    /// Short name used in logs.
    const KIND: &'static str;
    const ID_PREFIX: &'static str;
    /// Key of the JSON array mirrored to key-value storage.
    const STORAGE_KEY: &'static str;
    const LATENCY: LatencyProfile = LatencyProfile::STANDARD;

    fn id(&self) -> &str;

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

pub trait EntityPatch: Send + 'static {
    fn id(&self) -> &str;
}
