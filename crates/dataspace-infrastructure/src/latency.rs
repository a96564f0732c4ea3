//! Timer-backed latency

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use dataspace_core::services::{Latency, Operation};

/// Sleeps on the tokio timer for the requested duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLatency;

#[async_trait]
impl Latency for TokioLatency {
    async fn pause(&self, operation: Operation, duration: Duration) {
        trace!("Simulating {:?} latency: {:?}", operation, duration);
        tokio::time::sleep(duration).await;
    }
}
