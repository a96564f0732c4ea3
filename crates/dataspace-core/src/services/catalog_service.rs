//! Data products joined with their data sources

use std::collections::HashMap;

use crate::domain::{DataProduct, DataSource};
use crate::error::DomainError;
use crate::repositories::EntityRepository;
use crate::services::entity_service::EntityService;

/// Shown in place of a data source name when the referenced source no longer exists.
pub const UNKNOWN_DATA_SOURCE: &str = "Unknown data source";

/// Fills `dataSourceName` from the matching data source.
pub fn attach_source_names(products: &mut [DataProduct], sources: &[DataSource]) {
    let names: HashMap<&str, &str> = sources
        .iter()
        .map(|s| (s.id.as_str(), s.name.as_str()))
        .collect();
    for product in products.iter_mut() {
        let name = names
            .get(product.data_source_id.as_str())
            .copied()
            .unwrap_or(UNKNOWN_DATA_SOURCE);
        product.data_source_name = Some(name.to_string());
    }
}

impl<R: EntityRepository<DataProduct>> EntityService<DataProduct, R> {
    pub async fn get_all_with_sources<S: EntityRepository<DataSource>>(
        &self,
        sources: &EntityService<DataSource, S>,
    ) -> Result<Vec<DataProduct>, DomainError> {
        let mut products = self.get_all().await?;
        let sources = sources.get_all().await?;
        attach_source_names(&mut products, &sources);
        Ok(products)
    }

    pub async fn get_with_source<S: EntityRepository<DataSource>>(
        &self,
        id: &str,
        sources: &EntityService<DataSource, S>,
    ) -> Result<Option<DataProduct>, DomainError> {
        let Some(product) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        let sources = sources.get_all().await?;
        let mut products = [product];
        attach_source_names(&mut products, &sources);
        let [product] = products;
        Ok(Some(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::Utc;

    use crate::domain::*;
    use crate::services::latency::NoLatency;
    use crate::services::testing::VecRepository;

    fn source(id: &str, name: &str) -> DataSource {
        DataSource {
            id: id.to_string(),
            name: name.to_string(),
            kind: DataSourceKind::File {
                file_path: "/data/a.csv".to_string(),
            },
            created_at: Utc::now(),
            created_by: "admin".to_string(),
        }
    }

    fn product(id: &str, source_id: &str) -> DataProduct {
        DataProduct::from_draft(id.to_string(), Utc::now(), draft(id, source_id))
    }

    fn draft(name: &str, source_id: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            data_format: DataFormat::Csv,
            data_source_id: source_id.to_string(),
            product_type: ProductType::DataModel,
            billing_mode: BillingMode::Yearly,
            data_theme: "finance".to_string(),
            data_authorization: "internal".to_string(),
            application_field: ApplicationField::Finance,
            transfer_mode: TransferMode::Pull,
            tags: vec![],
            description: "d".to_string(),
            created_by: "admin".to_string(),
        }
    }

    #[test]
    fn test_attach_source_names() {
        let mut products = vec![product("p1", "ds-1"), product("p2", "ds-gone")];
        attach_source_names(&mut products, &[source("ds-1", "Ledger")]);
        assert_eq!(products[0].data_source_name.as_deref(), Some("Ledger"));
        assert_eq!(products[1].data_source_name.as_deref(), Some(UNKNOWN_DATA_SOURCE));
    }

    #[tokio::test]
    async fn test_get_with_source() {
        let latency = Arc::new(NoLatency);
        let products: EntityService<DataProduct, _> = EntityService::new(
            Arc::new(VecRepository::new(vec![product("p1", "ds-1")])),
            latency.clone(),
        );
        let sources: EntityService<DataSource, _> =
            EntityService::new(Arc::new(VecRepository::new(vec![source("ds-1", "Ledger")])), latency);

        let found = products.get_with_source("p1", &sources).await.unwrap().unwrap();
        assert_eq!(found.data_source_name.as_deref(), Some("Ledger"));
        assert!(products.get_with_source("p9", &sources).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_source_gets_placeholder_name() {
        let latency = Arc::new(NoLatency);
        let products: EntityService<DataProduct, _> = EntityService::new(
            Arc::new(VecRepository::new(vec![product("p1", "ds-1"), product("p2", "ds-gone")])),
            latency.clone(),
        );
        let sources: EntityService<DataSource, _> =
            EntityService::new(Arc::new(VecRepository::new(vec![source("ds-1", "Ledger")])), latency);

        let all = products.get_all_with_sources(&sources).await.unwrap();
        let names: Vec<&str> = all.iter().filter_map(|p| p.data_source_name.as_deref()).collect();
        assert_eq!(names, vec!["Ledger", UNKNOWN_DATA_SOURCE]);
    }

    #[tokio::test]
    async fn test_created_products_use_prod_prefix() {
        let products: EntityService<DataProduct, _> =
            EntityService::new(Arc::new(VecRepository::new(vec![])), Arc::new(NoLatency));
        let created = products.create(draft("Tariffs", "ds-1")).await.unwrap();
        assert!(created.id.starts_with("prod-"));
    }
}
