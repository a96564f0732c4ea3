// ============================================================================
// Data Space Infrastructure - Service Wiring
// File: crates/dataspace-infrastructure/src/bootstrap.rs
// Description: Builds every entity service from configuration
// ============================================================================

use std::sync::Arc;

use tracing::info;

use dataspace_core::domain::Entity;
use dataspace_core::domain::{DataProduct, DataSource, Order, Organization, Role, TrustSpace, User};
use dataspace_core::error::DomainError;
use dataspace_core::repositories::KeyValueStorage;
use dataspace_core::services::{EntityService, Latency, NoLatency};
use dataspace_shared::config::{AppConfig, LatencySettings, StorageSettings};

use crate::latency::TokioLatency;
use crate::repository::InMemoryRepository;
use crate::seed;
use crate::storage::{FileStorage, MemoryStorage};

pub type Service<E> = EntityService<E, InMemoryRepository<E>>;

/// One service per entity store, sharing a storage mirror and a latency source.
#[derive(Clone)]
pub struct ConsoleServices {
    pub data_sources: Service<DataSource>,
    pub products: Service<DataProduct>,
    pub orders: Service<Order>,
    pub organizations: Service<Organization>,
    pub roles: Service<Role>,
    pub trust_spaces: Service<TrustSpace>,
    pub users: Service<User>,
}

impl ConsoleServices {
    /// Builds from bundled seeds, then loads each store's mirrored copy.
    pub async fn initialize(config: &AppConfig) -> Result<Self, DomainError> {
        let services = Self::build(
            Self::storage_from_config(&config.storage),
            Self::latency_from_config(&config.latency),
        )?;
        services.initialize_from_storage().await?;
        info!("Entity services initialized");
        Ok(services)
    }

    pub fn build(
        storage: Option<Arc<dyn KeyValueStorage>>,
        latency: Arc<dyn Latency>,
    ) -> Result<Self, DomainError> {
        let products = seed::products()?;
        let orders = seed::orders(&products)?;

        Ok(Self {
            data_sources: Self::service(seed::data_sources()?, &storage, &latency),
            orders: Self::service(orders, &storage, &latency),
            products: Self::service(products, &storage, &latency),
            organizations: Self::service(seed::organizations()?, &storage, &latency),
            roles: Self::service(seed::roles()?, &storage, &latency),
            trust_spaces: Self::service(seed::trust_spaces()?, &storage, &latency),
            users: Self::service(seed::users()?, &storage, &latency),
        })
    }

    pub async fn initialize_from_storage(&self) -> Result<(), DomainError> {
        self.data_sources.initialize_from_storage().await?;
        self.products.initialize_from_storage().await?;
        self.orders.initialize_from_storage().await?;
        self.organizations.initialize_from_storage().await?;
        self.roles.initialize_from_storage().await?;
        self.trust_spaces.initialize_from_storage().await?;
        self.users.initialize_from_storage().await?;
        Ok(())
    }

    pub fn storage_from_config(settings: &StorageSettings) -> Option<Arc<dyn KeyValueStorage>> {
        if !settings.enabled {
            info!("Storage mirror disabled");
            return None;
        }
        let storage: Arc<dyn KeyValueStorage> = match &settings.directory {
            Some(dir) => {
                info!("Mirroring entity stores to {}", dir);
                Arc::new(FileStorage::new(dir))
            }
            None => Arc::new(MemoryStorage::new()),
        };
        Some(storage)
    }

    pub fn latency_from_config(settings: &LatencySettings) -> Arc<dyn Latency> {
        if settings.enabled {
            Arc::new(TokioLatency)
        } else {
            Arc::new(NoLatency)
        }
    }

    fn service<E: Entity>(
        records: Vec<E>,
        storage: &Option<Arc<dyn KeyValueStorage>>,
        latency: &Arc<dyn Latency>,
    ) -> Service<E> {
        EntityService::new(
            Arc::new(InMemoryRepository::new(records, storage.clone())),
            Arc::clone(latency),
        )
    }
}
