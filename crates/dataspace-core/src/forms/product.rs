//! Data product dialog

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{
    ApplicationField, BillingMode, DataFormat, DataProduct, ProductDraft, ProductPatch, ProductType,
    TransferMode,
};

use super::{non_blank, EntityForm, FieldErrors};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    pub data_format: DataFormat,
    #[validate(custom(function = "non_blank"))]
    pub data_source_id: String,
    pub product_type: ProductType,
    pub billing_mode: BillingMode,
    #[validate(custom(function = "non_blank"))]
    pub data_theme: String,
    #[validate(custom(function = "non_blank"))]
    pub data_authorization: String,
    pub application_field: ApplicationField,
    pub transfer_mode: TransferMode,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = "non_blank"))]
    pub description: String,
    #[serde(default)]
    pub created_by: String,
}

impl ProductForm {
    pub fn from_entity(product: &DataProduct) -> Self {
        Self {
            name: product.name.clone(),
            data_format: product.data_format,
            data_source_id: product.data_source_id.clone(),
            product_type: product.product_type,
            billing_mode: product.billing_mode,
            data_theme: product.data_theme.clone(),
            data_authorization: product.data_authorization.clone(),
            application_field: product.application_field,
            transfer_mode: product.transfer_mode,
            tags: product.tags.clone(),
            description: product.description.clone(),
            created_by: product.created_by.clone(),
        }
    }

    /// Trimmed, non-empty, first occurrence only.
    fn clean_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }
}

impl EntityForm for ProductForm {
    type Target = DataProduct;

    fn to_draft(&self) -> Result<ProductDraft, FieldErrors> {
        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            data_format: self.data_format,
            data_source_id: self.data_source_id.clone(),
            product_type: self.product_type,
            billing_mode: self.billing_mode,
            data_theme: self.data_theme.trim().to_string(),
            data_authorization: self.data_authorization.trim().to_string(),
            application_field: self.application_field,
            transfer_mode: self.transfer_mode,
            tags: self.clean_tags(),
            description: self.description.trim().to_string(),
            created_by: self.created_by.clone(),
        })
    }

    fn to_patch(&self, id: &str) -> ProductPatch {
        ProductPatch {
            id: id.to_string(),
            name: Some(self.name.trim().to_string()),
            data_format: Some(self.data_format),
            data_source_id: Some(self.data_source_id.clone()),
            product_type: Some(self.product_type),
            billing_mode: Some(self.billing_mode),
            data_theme: Some(self.data_theme.trim().to_string()),
            data_authorization: Some(self.data_authorization.trim().to_string()),
            application_field: Some(self.application_field),
            transfer_mode: Some(self.transfer_mode),
            tags: Some(self.clean_tags()),
            description: Some(self.description.trim().to_string()),
        }
    }
}
