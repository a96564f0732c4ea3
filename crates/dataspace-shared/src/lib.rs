//! # Data Space Shared
//! 
//! Shared constants, configuration, telemetry, and id helpers for the data space console.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
