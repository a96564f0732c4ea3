//! Common types

use chrono::Utc;
use uuid::Uuid;

use crate::constants::ID_SUFFIX_LEN;

/// Records are keyed by opaque strings such as `ds-1718000000000-k3j9x0a2b`.
pub type EntityId = String;

/// Builds `<prefix>-<unix millis>-<random suffix>`.
pub fn new_id(prefix: &str) -> EntityId {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(ID_SUFFIX_LEN)
        .collect();
    format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), suffix)
}
