// ============================================================================
// Data Space Core - Order Entity
// File: crates/dataspace-core/src/domain/order.rs
// Description: Purchase order for a data product
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dataspace_shared::EntityId;

use super::entity::{Entity, EntityPatch};
use super::product::DataProduct;

string_enum! {
    pub enum PurchaseType {
        Buyout => ("buyout", "Buyout"),
        Yearly => ("yearly", "Yearly"),
        Monthly => ("monthly", "Monthly"),
    }
}

string_enum! {
    pub enum OrderStatus {
        PendingPayment => ("pending_payment", "Pending payment"),
        PendingAuthorization => ("pending_authorization", "Pending authorization"),
        Authorized => ("authorized", "Authorized"),
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::PendingPayment
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    /// Denormalized copy taken when the order is placed.
    pub product: DataProduct,
    pub price: f64,
    pub purchase_type: PurchaseType,
    pub status: OrderStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub product: DataProduct,
    pub price: f64,
    pub purchase_type: PurchaseType,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub id: EntityId,
    pub price: Option<f64>,
    pub purchase_type: Option<PurchaseType>,
    pub status: Option<OrderStatus>,
}

impl EntityPatch for OrderPatch {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Order {
    type Draft = OrderDraft;
    type Patch = OrderPatch;

    const KIND: &'static str = "order";
    const ID_PREFIX: &'static str = "order";
    const STORAGE_KEY: &'static str = "orders";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: OrderDraft) -> Self {
        Self {
            id,
            product: draft.product,
            price: draft.price,
            purchase_type: draft.purchase_type,
            status: OrderStatus::default(),
            created_by: draft.created_by,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: OrderPatch, _now: DateTime<Utc>) {
        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = patch.purchase_type {
            self.purchase_type = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
    }
}
