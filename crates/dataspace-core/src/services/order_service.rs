//! Order workflow on top of the order store

use tracing::info;

use crate::domain::{Order, OrderDraft, OrderPatch, OrderStatus};
use crate::error::DomainError;
use crate::repositories::EntityRepository;
use crate::services::entity_service::EntityService;

impl<R: EntityRepository<Order>> EntityService<Order, R> {
    /// New orders always start as `pending_payment`.
    pub async fn place_order(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let order = self.create(draft).await?;
        info!(
            "Order {} placed for product {} at {:.2}",
            order.id, order.product.id, order.price
        );
        Ok(order)
    }

    pub async fn update_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        self.update(OrderPatch {
            id: order_id.to_string(),
            status: Some(status),
            ..Default::default()
        })
        .await
    }

    pub async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, DomainError> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .filter(|o| o.status == status)
            .collect())
    }
}
