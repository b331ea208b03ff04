use std::path::Path;
use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;
use persistence::product::source::ProductSourceJsonFile;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::load::LoadCatalogUseCaseImpl;
use business::domain::product::errors::ProductError;
use business::domain::product::repository::LoadSummary;
use business::domain::product::use_cases::load::LoadCatalogUseCase;

use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Wires the catalog and loads it. Fails if the catalog source cannot be read,
    /// in which case the server must not start.
    pub async fn new(catalog: &CatalogConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_source = Arc::new(ProductSourceJsonFile::new(catalog.path.clone()));
        let product_repository = Arc::new(ProductRepositoryInMemory::new(
            product_source,
            logger.clone(),
        ));

        // Catalog load happens once, before any request is served
        let load_use_case = LoadCatalogUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        };
        ensure_catalog_loaded(load_use_case.execute().await, &catalog.path)?;

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger,
        });

        let health_api = crate::api::health::routes::Api::new(product_repository);
        let product_api =
            crate::api::product::routes::ProductApi::new(get_all_use_case, get_by_id_use_case);

        Ok(Self {
            health_api,
            product_api,
        })
    }
}

/// Aborts startup on fatal load errors. A catalog that is already loaded is kept as is.
fn ensure_catalog_loaded(
    result: Result<LoadSummary, ProductError>,
    path: &Path,
) -> anyhow::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(ProductError::Repository(e)) if !e.is_fatal() => {
            tracing::warn!(error = %e, "product catalog load skipped");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "failed to load product catalog from {}: {}",
            path.display(),
            e
        )),
    }
}
