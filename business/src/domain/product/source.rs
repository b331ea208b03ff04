use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::RepositoryError;

/// Backing store the catalog is read from at startup.
///
/// Returns the raw records in their stored order; validation is up to the caller.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn read_records(&self) -> Result<Vec<Value>, RepositoryError>;
}
