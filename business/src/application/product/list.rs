use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::ListProductsUseCase;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Listing products");
        let records = self.repository.list_products().await?;
        let products: Vec<Product> = records.into_iter().map(Product::load).collect();
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::record::ProductRecord;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn list_products(&self) -> Result<Vec<ProductRecord>, RepositoryError>;
            async fn get_product(&self, id: i64) -> Result<ProductRecord, RepositoryError>;
            async fn add_product(&self, record: &ProductRecord) -> Result<(), RepositoryError>;
            async fn update_qty(&self, id: i64, qty: i64) -> Result<(), RepositoryError>;
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

    fn record(id: i64, name: &str, qty: Option<i64>) -> ProductRecord {
        ProductRecord {
            id: Some(id),
            name: Some(name.to_string()),
            qty,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn should_return_products_in_repository_order() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list_products().times(1).returning(|| {
            Ok(vec![
                record(3, "Sprocket", Some(2)),
                record(1, "Widget", None),
                record(2, "Gadget", Some(7)),
            ])
        });

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        let ids: Vec<Option<i64>> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
        assert_eq!(products[1].name.as_deref(), Some("Widget"));
        assert_eq!(products[1].qty, 0);
        assert_eq!(products[2].qty, 7);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_repository_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list_products().returning(|| Ok(vec![]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_error_unchanged() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list_products()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::DatabaseError))
        ));
    }
}
