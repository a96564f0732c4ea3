// ============================================================================
// Data Space Core - Trust Space Entity
// File: crates/dataspace-core/src/domain/trust_space.rs
// Description: Trusted data space shared by a set of users
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dataspace_shared::EntityId;

use super::entity::{Entity, EntityPatch};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustSpace {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// User ids.
    #[serde(default)]
    pub members: Vec<EntityId>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustSpaceDraft {
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub members: Vec<EntityId>,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustSpacePatch {
    pub id: EntityId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub members: Option<Vec<EntityId>>,
}

impl EntityPatch for TrustSpacePatch {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for TrustSpace {
    type Draft = TrustSpaceDraft;
    type Patch = TrustSpacePatch;

    const KIND: &'static str = "trust_space";
    const ID_PREFIX: &'static str = "space";
    const STORAGE_KEY: &'static str = "trustSpaces";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: TrustSpaceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            logo: draft.logo,
            members: draft.members,
            created_at,
            created_by: draft.created_by,
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: TrustSpacePatch, now: DateTime<Utc>) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.logo {
            self.logo = Some(v);
        }
        if let Some(v) = patch.members {
            self.members = v;
        }
        self.updated_at = Some(now);
    }
}
