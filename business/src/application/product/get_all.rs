use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        match params.limit {
            Some(limit) => self
                .logger
                .debug(&format!("Fetching up to {} products", limit)),
            None => self.logger.debug("Fetching all products"),
        }
        let products = self.repository.get_all(params.limit).await?;
        self.logger
            .debug(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProductProps;
    use crate::domain::product::repository::LoadSummary;
    use crate::domain::product::value_objects::{Price, ProductId, Stock};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn load(&self) -> Result<LoadSummary, RepositoryError>;
            async fn get_all(&self, limit: Option<usize>) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn count(&self) -> Result<usize, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: &str, title: &str) -> Product {
        Product::new(NewProductProps {
            id: ProductId::parse(id).unwrap(),
            title: title.to_string(),
            description: None,
            price: Price::from_f64(3.5).unwrap(),
            stock: Stock::from_count(4),
            attributes: Default::default(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_products_in_repository_order() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .with(eq(None))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    product("11111111-1111-1111-1111-111111111111", "Green Tea"),
                    product("22222222-2222-2222-2222-222222222222", "Black Tea"),
                ])
            });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetAllProductsParams { limit: None })
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title(), "Green Tea");
        assert_eq!(products[1].title(), "Black Tea");
    }

    #[tokio::test]
    async fn should_forward_limit_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .with(eq(Some(0)))
            .times(1)
            .returning(|_| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetAllProductsParams { limit: Some(0) })
            .await
            .unwrap();

        assert!(products.is_empty());
    }
}
