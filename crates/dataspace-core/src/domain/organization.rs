//! Organization entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dataspace_shared::EntityId;

use super::entity::{Entity, EntityPatch};

/// Member as embedded in an organization (a slim user reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub members: Vec<MemberRef>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Organization {
    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationDraft {
    pub name: String,
    pub description: String,
    pub members: Vec<MemberRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationPatch {
    pub id: EntityId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub members: Option<Vec<MemberRef>>,
}

impl EntityPatch for OrganizationPatch {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Organization {
    type Draft = OrganizationDraft;
    type Patch = OrganizationPatch;

    const KIND: &'static str = "organization";
    const ID_PREFIX: &'static str = "org";
    const STORAGE_KEY: &'static str = "organizations";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: OrganizationDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            members: draft.members,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: OrganizationPatch, now: DateTime<Utc>) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.members {
            self.members = v;
        }
        self.updated_at = Some(now);
    }
}
