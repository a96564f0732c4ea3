//! # Data Space Core - Forms Module
//! 
//! Create/edit form models. A form reports field-keyed errors and reaches the
//! service only when it validates.

pub mod data_source;
pub mod order;
pub mod organization;
pub mod product;
pub mod role;
pub mod trust_space;
pub mod user;

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use validator::{Validate, ValidationError, ValidationErrors};

use dataspace_shared::utils::{is_blank, to_camel_case};

use crate::domain::Entity;
use crate::error::DomainError;
use crate::repositories::EntityRepository;
use crate::services::EntityService;

pub use data_source::DataSourceForm;
pub use order::OrderForm;
pub use organization::OrganizationForm;
pub use product::ProductForm;
pub use role::RoleForm;
pub use trust_space::TrustSpaceForm;
pub use user::UserForm;

pub(crate) const REQUIRED: &str = "This field is required";

/// Field name (camelCase, as in the JSON shape) to the first message reported for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// One message per field. A missing value is reported before any format error.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, list) in errors.field_errors() {
            let chosen = list
                .iter()
                .find(|e| e.code == "required")
                .or_else(|| list.first());
            if let Some(first) = chosen {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                out.add(&to_camel_case(&field), message);
            }
        }
        out
    }

    /// Keeps the earlier message when the field already has one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn require(&mut self, field: &str, value: &str) {
        if is_blank(value) {
            self.add(field, REQUIRED);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error(transparent)]
    Service(#[from] DomainError),
}

impl SubmitError {
    /// Text for the failure banner of a dialog.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(_) => "Please correct the highlighted fields".to_string(),
            SubmitError::Service(DomainError::TransientFailure(_)) => {
                "The operation could not be saved, please try again".to_string()
            }
            SubmitError::Service(_) => "Operation failed".to_string(),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            SubmitError::Service(_) => None,
        }
    }
}

/// Form-side model of one entity kind.
pub trait EntityForm: Validate {
    type Target: Entity;

    /// Rules the derive cannot express, e.g. fields required by another field's value.
    fn extra_checks(&self, _errors: &mut FieldErrors) {}

    /// Fails only for a missing required value, which [`EntityForm::check`] already reports.
    fn to_draft(&self) -> Result<<Self::Target as Entity>::Draft, FieldErrors>;

    fn to_patch(&self, id: &str) -> <Self::Target as Entity>::Patch;

    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from_validation(&e),
        };
        self.extra_checks(&mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub async fn submit_create<F, R>(
    service: &EntityService<F::Target, R>,
    form: &F,
) -> Result<F::Target, SubmitError>
where
    F: EntityForm,
    R: EntityRepository<F::Target>,
{
    let draft = form
        .check()
        .and_then(|()| form.to_draft())
        .map_err(|errors| {
            debug!("Create {} rejected: {:?}", <F::Target as Entity>::KIND, errors);
            SubmitError::Invalid(errors)
        })?;
    service.create(draft).await.map_err(|e| {
        warn!("Create {} failed: {}", <F::Target as Entity>::KIND, e);
        SubmitError::from(e)
    })
}

/// `Ok(None)` when the record disappeared while the dialog was open.
pub async fn submit_update<F, R>(
    service: &EntityService<F::Target, R>,
    id: &str,
    form: &F,
) -> Result<Option<F::Target>, SubmitError>
where
    F: EntityForm,
    R: EntityRepository<F::Target>,
{
    form.check().map_err(|errors| {
        debug!("Update {} {} rejected: {:?}", <F::Target as Entity>::KIND, id, errors);
        SubmitError::Invalid(errors)
    })?;
    service.update(form.to_patch(id)).await.map_err(|e| {
        warn!("Update {} {} failed: {}", <F::Target as Entity>::KIND, id, e);
        SubmitError::from(e)
    })
}

pub(crate) fn non_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        Err(ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED)))
    } else {
        Ok(())
    }
}

/// Blank optional text is sent as absent.
pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !is_blank(v)).cloned()
}
