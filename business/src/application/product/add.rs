use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::record::ProductRecord;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::add::AddProductUseCase;

pub struct AddProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, record: ProductRecord) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Adding product: {}",
            record.name.as_deref().unwrap_or("<unnamed>")
        ));
        self.repository.add_product(&record).await?;
        self.logger.info("Product added");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;

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

    #[tokio::test]
    async fn should_forward_record_unchanged() {
        let record = ProductRecord {
            id: Some(12),
            name: Some("Gadget".to_string()),
            description: None,
            cost: Some(BigDecimal::from_str("4.50").unwrap()),
            qty: None,
        };
        let expected = record.clone();

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_add_product()
            .withf(move |r| *r == expected)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(record).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_forward_empty_record_without_validation() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_add_product()
            .withf(|r| *r == ProductRecord::default())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(ProductRecord::default()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_duplicated_error_unchanged() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_add_product()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = AddProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ProductRecord {
                id: Some(1),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::Duplicated))
        ));
    }
}
