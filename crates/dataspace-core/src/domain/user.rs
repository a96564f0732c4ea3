//! User domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dataspace_shared::EntityId;

use super::entity::{Entity, EntityPatch};
use super::organization::MemberRef;
use crate::services::latency::LatencyProfile;

string_enum! {
    pub enum UserStatus {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    pub fn to_member(&self) -> MemberRef {
        MemberRef {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: Some(self.role.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub id: EntityId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub status: Option<UserStatus>,
}

impl EntityPatch for UserPatch {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for User {
    type Draft = UserDraft;
    type Patch = UserPatch;

    const KIND: &'static str = "user";
    const ID_PREFIX: &'static str = "user";
    const STORAGE_KEY: &'static str = "users";
    const LATENCY: LatencyProfile = LatencyProfile::USERS;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            avatar: draft.avatar,
            status: UserStatus::Active,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch, now: DateTime<Utc>) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if let Some(v) = patch.avatar {
            self.avatar = Some(v);
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        self.updated_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = User::from_draft(
            "user-1".to_string(),
            Utc::now(),
            UserDraft {
                name: "Li Lei".to_string(),
                email: "lilei@example.com".to_string(),
                role: "admin".to_string(),
                avatar: None,
            },
        );
        assert!(user.is_active());
        let member = user.to_member();
        assert_eq!(member.id, "user-1");
        assert_eq!(member.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_deactivate() {
        let mut user = User::from_draft(
            "user-2".to_string(),
            Utc::now(),
            UserDraft {
                name: "Han Meimei".to_string(),
                email: "han@example.com".to_string(),
                role: "viewer".to_string(),
                avatar: None,
            },
        );
        user.apply_patch(
            UserPatch {
                id: "user-2".to_string(),
                status: Some(UserStatus::Inactive),
                ..Default::default()
            },
            Utc::now(),
        );
        assert!(!user.is_active());
        assert_eq!(user.email, "han@example.com");
    }
}
