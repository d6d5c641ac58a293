use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductParams {
    pub id: i64,
}

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, params: GetProductParams) -> Result<Product, ProductError>;
}
