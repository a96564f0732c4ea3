// ============================================================================
// Data Space Core - Data Source Entity
// File: crates/dataspace-core/src/domain/data_source.rs
// Description: Local data source, either a database connection or a file
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use dataspace_shared::utils::mask_secret;
use dataspace_shared::EntityId;

use super::entity::{Entity, EntityPatch};

string_enum! {
    /// Discriminant of [`DataSourceKind`].
    pub enum DataSourceType {
        Database => ("database", "Database"),
        File => ("file", "File"),
    }
}

/// Connection details keyed by the `type` discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DataSourceKind {
    Database {
        database_url: String,
        #[serde(default)]
        username: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<String>,
    },
    File {
        file_path: String,
    },
}

impl DataSourceKind {
    pub fn source_type(&self) -> DataSourceType {
        match self {
            DataSourceKind::Database { .. } => DataSourceType::Database,
            DataSourceKind::File { .. } => DataSourceType::File,
        }
    }

    fn blank(source_type: DataSourceType) -> Self {
        match source_type {
            DataSourceType::Database => DataSourceKind::Database {
                database_url: String::new(),
                username: String::new(),
                password: None,
            },
            DataSourceType::File => DataSourceKind::File {
                file_path: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: EntityId,
    pub name: String,
    #[serde(flatten)]
    pub kind: DataSourceKind,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl DataSource {
    pub fn source_type(&self) -> DataSourceType {
        self.kind.source_type()
    }

    /// One-line location for tables: the connection string or the file path.
    pub fn location(&self) -> String {
        match &self.kind {
            DataSourceKind::Database {
                database_url,
                username,
                password,
            } => format!(
                "{} ({}:{})",
                database_url,
                username,
                mask_secret(password.as_deref().unwrap_or_default())
            ),
            DataSourceKind::File { file_path } => file_path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceDraft {
    pub name: String,
    pub kind: DataSourceKind,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSourcePatch {
    pub id: EntityId,
    pub name: Option<String>,
    pub source_type: Option<DataSourceType>,
    pub database_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub file_path: Option<String>,
}

impl DataSourcePatch {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl EntityPatch for DataSourcePatch {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for DataSource {
    type Draft = DataSourceDraft;
    type Patch = DataSourcePatch;

    const KIND: &'static str = "data_source";
    const ID_PREFIX: &'static str = "ds";
    const STORAGE_KEY: &'static str = "dataSources";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: DataSourceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            kind: draft.kind,
            created_at,
            created_by: draft.created_by,
        }
    }

    fn apply_patch(&mut self, patch: DataSourcePatch, _now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }

        // Switching type starts the new variant from scratch
        if let Some(source_type) = patch.source_type {
            if source_type != self.kind.source_type() {
                self.kind = DataSourceKind::blank(source_type);
            }
        }

        match &mut self.kind {
            DataSourceKind::Database {
                database_url,
                username,
                password,
            } => {
                if let Some(v) = patch.database_url {
                    *database_url = v;
                }
                if let Some(v) = patch.username {
                    *username = v;
                }
                if let Some(v) = patch.password {
                    *password = Some(v);
                }
                if patch.file_path.is_some() {
                    debug!("Ignoring filePath on database source {}", self.id);
                }
            }
            DataSourceKind::File { file_path } => {
                if let Some(v) = patch.file_path {
                    *file_path = v;
                }
                if patch.database_url.is_some() || patch.username.is_some() || patch.password.is_some() {
                    debug!("Ignoring connection fields on file source {}", self.id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_source() -> DataSource {
        DataSource::from_draft(
            "ds-1".to_string(),
            Utc::now(),
            DataSourceDraft {
                name: "Sales".to_string(),
                kind: DataSourceKind::File {
                    file_path: "/x".to_string(),
                },
                created_by: "admin".to_string(),
            },
        )
    }

    #[test]
    fn test_name_only_patch_keeps_file_fields() {
        let mut ds = file_source();
        let mut patch = DataSourcePatch::new("ds-1");
        patch.name = Some("New Name".to_string());
        ds.apply_patch(patch, Utc::now());

        assert_eq!(ds.name, "New Name");
        assert_eq!(ds.source_type(), DataSourceType::File);
        assert_eq!(
            ds.kind,
            DataSourceKind::File {
                file_path: "/x".to_string()
            }
        );
    }

    #[test]
    fn test_switching_type_drops_other_variant_fields() {
        let mut ds = file_source();
        let mut patch = DataSourcePatch::new("ds-1");
        patch.source_type = Some(DataSourceType::Database);
        patch.database_url = Some("mysql://localhost:3306/sales".to_string());
        patch.username = Some("root".to_string());
        patch.file_path = Some("/ignored".to_string());
        ds.apply_patch(patch, Utc::now());

        assert_eq!(
            ds.kind,
            DataSourceKind::Database {
                database_url: "mysql://localhost:3306/sales".to_string(),
                username: "root".to_string(),
                password: None,
            }
        );
    }

    #[test]
    fn test_json_shape_is_flat_and_tagged() {
        let json = r#"{
            "id": "ds-2",
            "name": "Warehouse",
            "type": "database",
            "databaseUrl": "postgres://db:5432/wh",
            "username": "reader",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "createdBy": "admin"
        }"#;
        let ds: DataSource = serde_json::from_str(json).unwrap();
        assert_eq!(ds.source_type(), DataSourceType::Database);

        let value = serde_json::to_value(&ds).unwrap();
        assert_eq!(value["type"], "database");
        assert_eq!(value["databaseUrl"], "postgres://db:5432/wh");
        assert!(value.get("filePath").is_none());
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_location_masks_password() {
        let mut ds = file_source();
        ds.kind = DataSourceKind::Database {
            database_url: "mysql://h/db".to_string(),
            username: "u".to_string(),
            password: Some("secret".to_string()),
        };
        assert_eq!(ds.location(), "mysql://h/db (u:******)");
    }
}
