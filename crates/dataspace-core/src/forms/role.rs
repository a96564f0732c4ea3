//! Role dialog

use serde::{Deserialize, Serialize};
use validator::Validate;

use dataspace_shared::constants::{ROLE_EXPRESSION_MAX, ROLE_NAME_MAX, ROLE_SCOPE_MAX};

use crate::domain::{Role, RoleAction, RoleDraft, RolePatch};

use super::{non_blank, EntityForm, FieldErrors};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleForm {
    #[validate(
        custom(function = "non_blank"),
        length(max = ROLE_NAME_MAX, message = "Name cannot exceed 50 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = "non_blank"),
        length(max = ROLE_SCOPE_MAX, message = "Scope cannot exceed 100 characters")
    )]
    pub scope: String,
    #[serde(default)]
    pub actions: Vec<RoleAction>,
    #[validate(
        custom(function = "non_blank"),
        length(max = ROLE_EXPRESSION_MAX, message = "Permission expression cannot exceed 200 characters")
    )]
    pub permission_expression: String,
}

impl RoleForm {
    pub fn from_entity(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            scope: role.scope.clone(),
            actions: role.actions.clone(),
            permission_expression: role.permission_expression.clone(),
        }
    }
}

impl EntityForm for RoleForm {
    type Target = Role;

    fn to_draft(&self) -> Result<RoleDraft, FieldErrors> {
        Ok(RoleDraft {
            name: self.name.trim().to_string(),
            scope: self.scope.trim().to_string(),
            actions: self.actions.clone(),
            permission_expression: self.permission_expression.trim().to_string(),
        })
    }

    fn to_patch(&self, id: &str) -> RolePatch {
        RolePatch {
            id: id.to_string(),
            name: Some(self.name.trim().to_string()),
            scope: Some(self.scope.trim().to_string()),
            actions: Some(self.actions.clone()),
            permission_expression: Some(self.permission_expression.trim().to_string()),
        }
    }
}
