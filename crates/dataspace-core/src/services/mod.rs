//! Domain services (business logic)

pub mod latency;
pub mod entity_service;
pub mod order_service;
pub mod catalog_service;

#[cfg(test)]
pub(crate) mod testing;

pub use latency::{Latency, LatencyProfile, NoLatency, Operation};
pub use entity_service::EntityService;
pub use catalog_service::{attach_source_names, UNKNOWN_DATA_SOURCE};
