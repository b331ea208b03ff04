use serde::Deserialize;
use serde_json::Value;

use business::domain::errors::RepositoryError;

/// Accepted on-disk shapes of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Records(Vec<Value>),
    Wrapped { products: Vec<Value> },
}

impl CatalogDocument {
    fn into_records(self) -> Vec<Value> {
        match self {
            CatalogDocument::Records(records) => records,
            CatalogDocument::Wrapped { products } => products,
        }
    }
}

/// Parses a catalog document into its raw records, keeping their order.
///
/// Either a top-level array or an object with a `products` array is accepted.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Value>, RepositoryError> {
    serde_json::from_slice::<CatalogDocument>(bytes)
        .map(CatalogDocument::into_records)
        .map_err(|e| {
            tracing::error!(error = %e, "catalog document is not a list of records");
            RepositoryError::SourceCorrupt
        })
}
