//! Organization dialog

use serde::{Deserialize, Serialize};
use validator::Validate;

use dataspace_shared::constants::{ORGANIZATION_DESCRIPTION_MAX, ORGANIZATION_NAME_MAX};

use crate::domain::{MemberRef, Organization, OrganizationDraft, OrganizationPatch};

use super::{non_blank, EntityForm, FieldErrors};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationForm {
    #[validate(
        custom(function = "non_blank"),
        length(max = ORGANIZATION_NAME_MAX, message = "Name cannot exceed 50 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = "non_blank"),
        length(max = ORGANIZATION_DESCRIPTION_MAX, message = "Description cannot exceed 200 characters")
    )]
    pub description: String,
    #[serde(default)]
    pub members: Vec<MemberRef>,
}

impl OrganizationForm {
    pub fn from_entity(org: &Organization) -> Self {
        Self {
            name: org.name.clone(),
            description: org.description.clone(),
            members: org.members.clone(),
        }
    }
}

impl EntityForm for OrganizationForm {
    type Target = Organization;

    fn extra_checks(&self, errors: &mut FieldErrors) {
        for (i, member) in self.members.iter().enumerate() {
            if self.members[..i].iter().any(|m| m.id == member.id) {
                errors.add("members", format!("{} is listed twice", member.name));
            }
        }
    }

    fn to_draft(&self) -> Result<OrganizationDraft, FieldErrors> {
        Ok(OrganizationDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            members: self.members.clone(),
        })
    }

    fn to_patch(&self, id: &str) -> OrganizationPatch {
        OrganizationPatch {
            id: id.to_string(),
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            members: Some(self.members.clone()),
        }
    }
}
