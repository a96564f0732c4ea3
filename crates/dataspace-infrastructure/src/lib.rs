//! # Data Space Infrastructure
//! 
//! Storage backends, in-memory entity repositories, seed data and wiring (adapters).

pub mod storage;
pub mod repository;
pub mod seed;
pub mod latency;
pub mod bootstrap;

pub use storage::{FileStorage, MemoryStorage};
pub use repository::InMemoryRepository;
pub use latency::TokioLatency;
pub use bootstrap::{ConsoleServices, Service};
