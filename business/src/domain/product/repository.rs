use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductId;

/// Outcome of populating a repository from its backing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Read-only product catalog, populated once before requests are served.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Reads the backing source and builds the catalog.
    ///
    /// Fails with `AlreadyLoaded` on any call after the first successful one.
    async fn load(&self) -> Result<LoadSummary, RepositoryError>;
    /// Products in load order, truncated to `limit` when given.
    async fn get_all(&self, limit: Option<usize>) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}
