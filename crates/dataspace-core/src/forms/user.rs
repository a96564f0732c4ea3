//! User dialog

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{User, UserDraft, UserPatch, UserStatus};

use super::{non_blank, optional_text, EntityForm, FieldErrors};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    #[validate(
        custom(function = "non_blank"),
        email(message = "Invalid email address")
    )]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

impl UserForm {
    pub fn from_entity(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            avatar: user.avatar.clone(),
            status: Some(user.status),
        }
    }
}

impl EntityForm for UserForm {
    type Target = User;

    fn to_draft(&self) -> Result<UserDraft, FieldErrors> {
        Ok(UserDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            role: self.role.trim().to_string(),
            avatar: optional_text(&self.avatar),
        })
    }

    fn to_patch(&self, id: &str) -> UserPatch {
        UserPatch {
            id: id.to_string(),
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_lowercase()),
            role: Some(self.role.trim().to_string()),
            avatar: optional_text(&self.avatar),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::forms::{submit_create, REQUIRED};
    use crate::services::testing::{RecordingLatency, VecRepository};
    use crate::services::EntityService;

    #[test]
    fn test_email_rules() {
        let mut form = UserForm {
            name: "Li Wei".into(),
            ..Default::default()
        };
        assert_eq!(form.check().unwrap_err().get("email"), Some(REQUIRED));

        form.email = "not-an-email".into();
        assert_eq!(
            form.check().unwrap_err().get("email"),
            Some("Invalid email address")
        );

        form.email = "li.wei@example.com".into();
        assert!(form.check().is_ok());
    }

    #[tokio::test]
    async fn test_created_user_is_active() {
        let svc: EntityService<User, VecRepository<User>> = EntityService::new(
            Arc::new(VecRepository::new(Vec::new())),
            Arc::new(RecordingLatency::default()),
        );
        let form = UserForm {
            name: "Li Wei".into(),
            email: "Li.Wei@Example.com".into(),
            role: "Analyst".into(),
            avatar: None,
            status: None,
        };
        let user = submit_create(&svc, &form).await.unwrap();
        assert_eq!(user.email, "li.wei@example.com");
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.id.starts_with("user-"));
    }
}
