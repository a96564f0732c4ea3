//! Bundled seed data, one JSON array per entity store

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use dataspace_core::domain::{
    DataProduct, DataSource, Order, OrderStatus, Organization, PurchaseType, Role, TrustSpace, User,
};
use dataspace_core::error::DomainError;
use dataspace_shared::EntityId;

const DATA_SOURCES: &str = include_str!("../seed/dataSources.json");
const PRODUCTS: &str = include_str!("../seed/products.json");
const ORDERS: &str = include_str!("../seed/orders.json");
const ORGANIZATIONS: &str = include_str!("../seed/organizations.json");
const ROLES: &str = include_str!("../seed/roles.json");
const TRUST_SPACES: &str = include_str!("../seed/trustSpaces.json");
const USERS: &str = include_str!("../seed/users.json");

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>, DomainError> {
    serde_json::from_str(json)
        .map_err(|e| DomainError::SerializationError(format!("seed {}: {}", name, e)))
}

pub fn data_sources() -> Result<Vec<DataSource>, DomainError> {
    parse("dataSources", DATA_SOURCES)
}

pub fn products() -> Result<Vec<DataProduct>, DomainError> {
    parse("products", PRODUCTS)
}

pub fn organizations() -> Result<Vec<Organization>, DomainError> {
    parse("organizations", ORGANIZATIONS)
}

pub fn roles() -> Result<Vec<Role>, DomainError> {
    parse("roles", ROLES)
}

pub fn trust_spaces() -> Result<Vec<TrustSpace>, DomainError> {
    parse("trustSpaces", TRUST_SPACES)
}

pub fn users() -> Result<Vec<User>, DomainError> {
    parse("users", USERS)
}

/// Order seed rows reference their product by id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderSeed {
    id: EntityId,
    product_id: EntityId,
    price: f64,
    purchase_type: PurchaseType,
    #[serde(default)]
    status: OrderStatus,
    created_by: String,
    created_at: DateTime<Utc>,
}

/// Orders joined to `products`; rows naming an unknown product are dropped.
pub fn orders(products: &[DataProduct]) -> Result<Vec<Order>, DomainError> {
    let rows: Vec<OrderSeed> = parse("orders", ORDERS)?;
    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let Some(product) = products.iter().find(|p| p.id == row.product_id) else {
                warn!("Seed order {} references unknown product {}", row.id, row.product_id);
                return None;
            };
            Some(Order {
                id: row.id,
                product: product.clone(),
                price: row.price,
                purchase_type: row.purchase_type,
                status: row.status,
                created_by: row.created_by,
                created_at: row.created_at,
            })
        })
        .collect())
}
