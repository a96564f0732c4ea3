//! Trust space dialog

use serde::{Deserialize, Serialize};
use validator::Validate;

use dataspace_shared::EntityId;

use crate::domain::{TrustSpace, TrustSpaceDraft, TrustSpacePatch};

use super::{non_blank, optional_text, EntityForm, FieldErrors};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrustSpaceForm {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    #[validate(custom(function = "non_blank"))]
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub members: Vec<EntityId>,
    #[serde(default)]
    pub created_by: String,
}

impl TrustSpaceForm {
    pub fn from_entity(space: &TrustSpace) -> Self {
        Self {
            name: space.name.clone(),
            description: space.description.clone(),
            logo: space.logo.clone(),
            members: space.members.clone(),
            created_by: space.created_by.clone(),
        }
    }

    fn unique_members(&self) -> Vec<EntityId> {
        let mut members: Vec<EntityId> = Vec::with_capacity(self.members.len());
        for id in &self.members {
            if !members.contains(id) {
                members.push(id.clone());
            }
        }
        members
    }
}

impl EntityForm for TrustSpaceForm {
    type Target = TrustSpace;

    fn to_draft(&self) -> Result<TrustSpaceDraft, FieldErrors> {
        Ok(TrustSpaceDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            logo: optional_text(&self.logo),
            members: self.unique_members(),
            created_by: self.created_by.clone(),
        })
    }

    fn to_patch(&self, id: &str) -> TrustSpacePatch {
        TrustSpacePatch {
            id: id.to_string(),
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            logo: optional_text(&self.logo),
            members: Some(self.unique_members()),
        }
    }
}
