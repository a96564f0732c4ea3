//! Role entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dataspace_shared::EntityId;

use super::entity::{Entity, EntityPatch};

string_enum! {
    pub enum RoleAction {
        Create => ("create", "Create"),
        Read => ("read", "Read"),
        Update => ("update", "Update"),
        Delete => ("delete", "Delete"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    pub scope: String,
    #[serde(default)]
    pub actions: Vec<RoleAction>,
    pub permission_expression: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Role {
    pub fn allows(&self, action: RoleAction) -> bool {
        self.actions.contains(&action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDraft {
    pub name: String,
    pub scope: String,
    pub actions: Vec<RoleAction>,
    pub permission_expression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePatch {
    pub id: EntityId,
    pub name: Option<String>,
    pub scope: Option<String>,
    pub actions: Option<Vec<RoleAction>>,
    pub permission_expression: Option<String>,
}

impl EntityPatch for RolePatch {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Role {
    type Draft = RoleDraft;
    type Patch = RolePatch;

    const KIND: &'static str = "role";
    const ID_PREFIX: &'static str = "role";
    const STORAGE_KEY: &'static str = "roles";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: RoleDraft) -> Self {
        let mut actions: Vec<RoleAction> = Vec::with_capacity(draft.actions.len());
        for action in draft.actions {
            if !actions.contains(&action) {
                actions.push(action);
            }
        }
        Self {
            id,
            name: draft.name,
            scope: draft.scope,
            actions,
            permission_expression: draft.permission_expression,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: RolePatch, now: DateTime<Utc>) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.scope {
            self.scope = v;
        }
        if let Some(v) = patch.actions {
            self.actions = v;
        }
        if let Some(v) = patch.permission_expression {
            self.permission_expression = v;
        }
        self.updated_at = Some(now);
    }
}
