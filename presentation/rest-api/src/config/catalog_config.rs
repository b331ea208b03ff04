use std::env;
use std::path::PathBuf;

const DEFAULT_CATALOG_PATH: &str = "data/products.json";

/// Location of the product catalog read at startup
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_PATH: JSON file holding the product records (default: "data/products.json")
    pub fn from_env() -> Self {
        Self::from_value(env::var("CATALOG_PATH").ok())
    }

    fn from_value(path: Option<String>) -> Self {
        let path = path
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        Self {
            path: PathBuf::from(path),
        }
    }
}
