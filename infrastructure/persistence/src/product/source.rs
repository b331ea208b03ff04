use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::product::source::ProductSource;

use super::document::parse_catalog;

/// Catalog stored as a JSON file on local disk.
pub struct ProductSourceJsonFile {
    path: PathBuf,
}

impl ProductSourceJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for ProductSourceJsonFile {
    async fn read_records(&self) -> Result<Vec<Value>, RepositoryError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "catalog file unreadable");
            RepositoryError::SourceUnavailable
        })?;

        parse_catalog(&bytes)
    }
}

/// Fixed set of records held in memory. Used for fixtures and demos.
#[derive(Debug, Clone, Default)]
pub struct ProductSourceInMemory {
    records: Vec<Value>,
}

impl ProductSourceInMemory {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl ProductSource for ProductSourceInMemory {
    async fn read_records(&self) -> Result<Vec<Value>, RepositoryError> {
        Ok(self.records.clone())
    }
}
