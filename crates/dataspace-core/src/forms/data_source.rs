//! Data source dialog

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{DataSource, DataSourceDraft, DataSourceKind, DataSourcePatch, DataSourceType};

use super::{non_blank, optional_text, EntityForm, FieldErrors};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceForm {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    pub source_type: DataSourceType,
    #[serde(default)]
    pub database_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub created_by: String,
}

impl DataSourceForm {
    pub fn database(name: &str, database_url: &str, username: &str) -> Self {
        Self {
            name: name.to_string(),
            source_type: DataSourceType::Database,
            database_url: database_url.to_string(),
            username: username.to_string(),
            password: None,
            file_path: String::new(),
            created_by: String::new(),
        }
    }

    pub fn file(name: &str, file_path: &str) -> Self {
        Self {
            name: name.to_string(),
            source_type: DataSourceType::File,
            database_url: String::new(),
            username: String::new(),
            password: None,
            file_path: file_path.to_string(),
            created_by: String::new(),
        }
    }

    /// Prefills the edit dialog.
    pub fn from_entity(source: &DataSource) -> Self {
        let mut form = match &source.kind {
            DataSourceKind::Database {
                database_url,
                username,
                password,
            } => {
                let mut form = Self::database(&source.name, database_url, username);
                form.password = password.clone();
                form
            }
            DataSourceKind::File { file_path } => Self::file(&source.name, file_path),
        };
        form.created_by = source.created_by.clone();
        form
    }

    fn kind(&self) -> DataSourceKind {
        match self.source_type {
            DataSourceType::Database => DataSourceKind::Database {
                database_url: self.database_url.trim().to_string(),
                username: self.username.trim().to_string(),
                password: optional_text(&self.password),
            },
            DataSourceType::File => DataSourceKind::File {
                file_path: self.file_path.trim().to_string(),
            },
        }
    }
}

impl EntityForm for DataSourceForm {
    type Target = DataSource;

    fn extra_checks(&self, errors: &mut FieldErrors) {
        match self.source_type {
            DataSourceType::Database => {
                errors.require("databaseUrl", &self.database_url);
                errors.require("username", &self.username);
            }
            DataSourceType::File => errors.require("filePath", &self.file_path),
        }
    }

    fn to_draft(&self) -> Result<DataSourceDraft, FieldErrors> {
        Ok(DataSourceDraft {
            name: self.name.trim().to_string(),
            kind: self.kind(),
            created_by: self.created_by.clone(),
        })
    }

    fn to_patch(&self, id: &str) -> DataSourcePatch {
        let mut patch = DataSourcePatch::new(id);
        patch.name = Some(self.name.trim().to_string());
        patch.source_type = Some(self.source_type);
        match self.kind() {
            DataSourceKind::Database {
                database_url,
                username,
                password,
            } => {
                patch.database_url = Some(database_url);
                patch.username = Some(username);
                patch.password = password;
            }
            DataSourceKind::File { file_path } => patch.file_path = Some(file_path),
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::forms::{submit_create, submit_update, SubmitError};
    use crate::services::testing::{RecordingLatency, VecRepository};
    use crate::services::EntityService;

    fn service() -> (
        EntityService<DataSource, VecRepository<DataSource>>,
        Arc<RecordingLatency>,
    ) {
        let latency = Arc::new(RecordingLatency::default());
        let svc = EntityService::new(Arc::new(VecRepository::new(Vec::new())), latency.clone());
        (svc, latency)
    }

    #[tokio::test]
    async fn test_missing_database_url_never_reaches_service() {
        let (svc, latency) = service();
        let form = DataSourceForm::database("Warehouse", "", "admin");

        let err = submit_create(&svc, &form).await.unwrap_err();
        let errors = err.field_errors().unwrap();
        assert!(errors.contains("databaseUrl"));
        assert!(!errors.contains("username"));

        assert!(latency.calls().is_empty());
        assert_eq!(svc.repository().write_count(), 0);
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[test]
    fn test_file_source_requires_only_file_path() {
        let form = DataSourceForm::file("Exports", " ");
        let errors = form.check().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["filePath"]);
    }

    #[tokio::test]
    async fn test_valid_form_creates_and_updates() {
        let (svc, _) = service();
        let mut form = DataSourceForm::database(" Warehouse ", "postgres://db:5432/dw", "admin");
        form.password = Some(String::new());

        let created = submit_create(&svc, &form).await.unwrap();
        assert_eq!(created.name, "Warehouse");
        assert_eq!(
            created.kind,
            DataSourceKind::Database {
                database_url: "postgres://db:5432/dw".into(),
                username: "admin".into(),
                password: None,
            }
        );

        let edit = DataSourceForm::file("Warehouse dump", "/data/dw.csv");
        let updated = submit_update(&svc, &created.id, &edit).await.unwrap().unwrap();
        assert_eq!(updated.source_type(), DataSourceType::File);
        assert_eq!(updated.location(), "/data/dw.csv");
    }

    #[tokio::test]
    async fn test_blank_name_on_edit_is_rejected() {
        let (svc, latency) = service();
        let form = DataSourceForm::file("", "/tmp/a.csv");
        let err = submit_update(&svc, "ds-1", &form).await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ref e) if e.contains("name")));
        assert!(latency.calls().is_empty());
    }

    #[test]
    fn test_prefill_round_trips_entity_fields() {
        let source = DataSource {
            id: "ds-1".into(),
            name: "CRM".into(),
            kind: DataSourceKind::Database {
                database_url: "mysql://crm".into(),
                username: "ro".into(),
                password: Some("secret".into()),
            },
            created_at: chrono::Utc::now(),
            created_by: "Wu Xiyan".into(),
        };
        let form = DataSourceForm::from_entity(&source);
        assert!(form.check().is_ok());
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.kind, source.kind);
        assert_eq!(draft.created_by, "Wu Xiyan");
    }
}
