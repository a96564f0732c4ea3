//! Order dialog

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{DataProduct, Order, OrderDraft, OrderPatch, OrderStatus, PurchaseType};

use super::{EntityForm, FieldErrors, REQUIRED};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    #[serde(default)]
    pub product: Option<DataProduct>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    pub purchase_type: PurchaseType,
    /// Only editable on existing orders.
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub created_by: String,
}

impl OrderForm {
    pub fn new(product: DataProduct, price: f64, purchase_type: PurchaseType) -> Self {
        Self {
            product: Some(product),
            price,
            purchase_type,
            status: None,
            created_by: String::new(),
        }
    }

    pub fn from_entity(order: &Order) -> Self {
        Self {
            product: Some(order.product.clone()),
            price: order.price,
            purchase_type: order.purchase_type,
            status: Some(order.status),
            created_by: order.created_by.clone(),
        }
    }

    fn missing_product() -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.add("product", REQUIRED);
        errors
    }
}

impl EntityForm for OrderForm {
    type Target = Order;

    fn extra_checks(&self, errors: &mut FieldErrors) {
        if self.product.is_none() {
            errors.add("product", REQUIRED);
        }
        if !self.price.is_finite() {
            errors.add("price", "Price must be a number");
        }
    }

    fn to_draft(&self) -> Result<OrderDraft, FieldErrors> {
        let product = self.product.clone().ok_or_else(Self::missing_product)?;
        Ok(OrderDraft {
            product,
            price: self.price,
            purchase_type: self.purchase_type,
            created_by: self.created_by.clone(),
        })
    }

    fn to_patch(&self, id: &str) -> OrderPatch {
        OrderPatch {
            id: id.to_string(),
            price: Some(self.price),
            purchase_type: Some(self.purchase_type),
            status: self.status,
        }
    }
}
