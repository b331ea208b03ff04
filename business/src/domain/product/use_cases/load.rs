use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::LoadSummary;

#[async_trait]
pub trait LoadCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<LoadSummary, ProductError>;
}
