use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::record::ProductRecord;

/// Record store backing the catalog.
///
/// Works on raw records; turning them into `Product`s is the use cases' job.
/// A lookup or quantity update for an unknown id yields `RepositoryError::NotFound`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, RepositoryError>;
    async fn get_product(&self, id: i64) -> Result<ProductRecord, RepositoryError>;
    async fn add_product(&self, record: &ProductRecord) -> Result<(), RepositoryError>;
    async fn update_qty(&self, id: i64, qty: i64) -> Result<(), RepositoryError>;
}
