use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::record::ProductRecord;

#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    /// Hands `record` to the store as-is. Any id the store generates is not reported.
    async fn execute(&self, record: ProductRecord) -> Result<(), ProductError>;
}
