use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::product::repository::{LoadSummary, ProductRepository};
use business::domain::product::source::ProductSource;
use business::domain::product::value_objects::ProductId;

/// Products in load order plus an id index into that sequence.
#[derive(Debug, Default)]
struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).and_then(|&position| self.products.get(position))
    }
}

/// In-memory product catalog filled once from a `ProductSource`.
///
/// The catalog lives in a write-once cell: after `load` succeeds it is never
/// mutated again, so reads take no locks and the repository can be shared
/// freely between request handlers. Before `load` the catalog reads as empty.
///
/// Records that fail validation, and records repeating an id already seen,
/// are skipped and logged rather than aborting the load.
pub struct ProductRepositoryInMemory {
    source: Arc<dyn ProductSource>,
    logger: Arc<dyn Logger>,
    catalog: OnceCell<Catalog>,
}

impl ProductRepositoryInMemory {
    pub fn new(source: Arc<dyn ProductSource>, logger: Arc<dyn Logger>) -> Self {
        Self {
            source,
            logger,
            catalog: OnceCell::new(),
        }
    }

    fn build(&self, records: Vec<Value>) -> (Catalog, LoadSummary) {
        let mut catalog = Catalog::default();
        let mut summary = LoadSummary::default();

        for (position, record) in records.into_iter().enumerate() {
            let product = match Product::from_record(record) {
                Ok(product) => product,
                Err(e) => {
                    self.logger
                        .warn(&format!("Skipping product record #{}: {}", position, e));
                    summary.skipped += 1;
                    continue;
                }
            };

            match catalog.index.entry(*product.id()) {
                Entry::Occupied(_) => {
                    self.logger.warn(&format!(
                        "Skipping product record #{}: duplicated id {}",
                        position,
                        product.id()
                    ));
                    summary.skipped += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(catalog.products.len());
                    catalog.products.push(product);
                    summary.loaded += 1;
                }
            }
        }

        (catalog, summary)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn load(&self) -> Result<LoadSummary, RepositoryError> {
        if self.catalog.get().is_some() {
            return Err(RepositoryError::AlreadyLoaded);
        }

        let records = self.source.read_records().await?;
        let (catalog, summary) = self.build(records);

        // A concurrent load may have won the race while the source was read.
        self.catalog
            .set(catalog)
            .map_err(|_| RepositoryError::AlreadyLoaded)?;

        if let Some(catalog) = self.catalog.get() {
            for product in &catalog.products {
                self.logger.debug(&format!(
                    "Loaded product {} \"{}\"",
                    product.id(),
                    product.title()
                ));
            }
        }

        Ok(summary)
    }

    async fn get_all(&self, limit: Option<usize>) -> Result<Vec<Product>, RepositoryError> {
        let Some(catalog) = self.catalog.get() else {
            return Ok(Vec::new());
        };

        Ok(catalog
            .products
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .catalog
            .get()
            .and_then(|catalog| catalog.get(id))
            .cloned())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self
            .catalog
            .get()
            .map_or(0, |catalog| catalog.products.len()))
    }
}
