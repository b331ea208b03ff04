use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductByIdParams {
    /// Raw identifier as received; validated before any lookup.
    pub id: String,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    /// `Ok(None)` means no such product, which is not an error.
    async fn execute(&self, params: GetProductByIdParams)
    -> Result<Option<Product>, ProductError>;
}
