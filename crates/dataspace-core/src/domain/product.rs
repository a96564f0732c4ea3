// ============================================================================
// Data Space Core - Data Product Entity
// File: crates/dataspace-core/src/domain/product.rs
// Description: Data product published from a local data source
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dataspace_shared::EntityId;

use super::entity::{Entity, EntityPatch};

string_enum! {
    pub enum DataFormat {
        Json => ("json", "JSON"),
        Csv => ("csv", "CSV"),
        Word => ("word", "Word"),
        Pdf => ("pdf", "PDF"),
    }
}

string_enum! {
    pub enum ProductType {
        Api => ("api", "API"),
        DataModel => ("data_model", "Data Model"),
        Report => ("report", "Report"),
        Corpus => ("corpus", "Corpus"),
    }
}

string_enum! {
    pub enum BillingMode {
        OneTime => ("one_time", "One-time"),
        Yearly => ("yearly", "Yearly"),
        Monthly => ("monthly", "Monthly"),
        PayAsYouGo => ("pay_as_you_go", "Pay as you go"),
    }
}

string_enum! {
    pub enum ApplicationField {
        Industry => ("industry", "Industry"),
        Trade => ("trade", "Trade"),
        Transport => ("transport", "Transport"),
        Finance => ("finance", "Finance"),
        Medical => ("medical", "Medical"),
    }
}

string_enum! {
    pub enum TransferMode {
        Push => ("push", "Pushed by provider"),
        Pull => ("pull", "Pulled by consumer"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProduct {
    pub id: EntityId,
    pub name: String,
    pub data_format: DataFormat,
    pub data_source_id: EntityId,
    /// Display only; resolved from the data source store on read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_name: Option<String>,
    pub product_type: ProductType,
    pub billing_mode: BillingMode,
    pub data_theme: String,
    pub data_authorization: String,
    pub application_field: ApplicationField,
    pub transfer_mode: TransferMode,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub data_format: DataFormat,
    pub data_source_id: EntityId,
    pub product_type: ProductType,
    pub billing_mode: BillingMode,
    pub data_theme: String,
    pub data_authorization: String,
    pub application_field: ApplicationField,
    pub transfer_mode: TransferMode,
    pub tags: Vec<String>,
    pub description: String,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub id: EntityId,
    pub name: Option<String>,
    pub data_format: Option<DataFormat>,
    pub data_source_id: Option<EntityId>,
    pub product_type: Option<ProductType>,
    pub billing_mode: Option<BillingMode>,
    pub data_theme: Option<String>,
    pub data_authorization: Option<String>,
    pub application_field: Option<ApplicationField>,
    pub transfer_mode: Option<TransferMode>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}

impl EntityPatch for ProductPatch {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for DataProduct {
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    const KIND: &'static str = "product";
    const ID_PREFIX: &'static str = "prod";
    const STORAGE_KEY: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            data_format: draft.data_format,
            data_source_id: draft.data_source_id,
            data_source_name: None,
            product_type: draft.product_type,
            billing_mode: draft.billing_mode,
            data_theme: draft.data_theme,
            data_authorization: draft.data_authorization,
            application_field: draft.application_field,
            transfer_mode: draft.transfer_mode,
            tags: draft.tags,
            description: draft.description,
            created_at,
            created_by: draft.created_by,
        }
    }

    fn apply_patch(&mut self, patch: ProductPatch, _now: DateTime<Utc>) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.data_format {
            self.data_format = v;
        }
        if let Some(v) = patch.data_source_id {
            // The cached name belongs to the previous source
            if v != self.data_source_id {
                self.data_source_name = None;
            }
            self.data_source_id = v;
        }
        if let Some(v) = patch.product_type {
            self.product_type = v;
        }
        if let Some(v) = patch.billing_mode {
            self.billing_mode = v;
        }
        if let Some(v) = patch.data_theme {
            self.data_theme = v;
        }
        if let Some(v) = patch.data_authorization {
            self.data_authorization = v;
        }
        if let Some(v) = patch.application_field {
            self.application_field = v;
        }
        if let Some(v) = patch.transfer_mode {
            self.transfer_mode = v;
        }
        if let Some(v) = patch.tags {
            self.tags = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
    }
}
