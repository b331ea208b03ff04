use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::{LoadSummary, ProductRepository};
use crate::domain::product::use_cases::load::LoadCatalogUseCase;

pub struct LoadCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCatalogUseCase for LoadCatalogUseCaseImpl {
    async fn execute(&self) -> Result<LoadSummary, ProductError> {
        self.logger.info("Loading product catalog");

        let summary = self.repository.load().await.inspect_err(|e| {
            self.logger
                .error(&format!("Product catalog could not be loaded: {}", e))
        })?;

        if summary.skipped > 0 {
            self.logger.warn(&format!(
                "Product catalog loaded with {} products, {} records skipped",
                summary.loaded, summary.skipped
            ));
        } else {
            self.logger.info(&format!(
                "Product catalog loaded with {} products",
                summary.loaded
            ));
        }

        Ok(summary)
    }
}
