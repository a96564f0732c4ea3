//! # Data Space Core
//! 
//! Navigation engine, domain entities, repository ports, CRUD services, and form
//! validation for the data space console.

pub mod domain;
pub mod navigation;
pub mod services;
pub mod repositories;
pub mod forms;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
