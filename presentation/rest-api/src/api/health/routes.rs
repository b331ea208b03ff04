use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::product::repository::ProductRepository;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Number of products in the loaded catalog
    pub products: u64,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    repository: Arc<dyn ProductRepository>,
}

impl Api {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running, "degraded" if the catalog cannot be read
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `products`: Size of the catalog loaded at startup
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let (status, products) = match self.repository.count().await {
            Ok(count) => ("healthy", u64::try_from(count).unwrap_or(u64::MAX)),
            Err(e) => {
                tracing::error!(error = %e, "product catalog unavailable for health check");
                ("degraded", 0)
            }
        };

        Json(HealthCheckResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            products,
        })
    }
}
