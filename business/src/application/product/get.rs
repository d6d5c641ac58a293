use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get::{GetProductParams, GetProductUseCase};

pub struct GetProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductUseCase for GetProductUseCaseImpl {
    async fn execute(&self, params: GetProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product: {}", params.id));
        let record = self.repository.get_product(params.id).await?;
        Ok(Product::load(record))
    }
}
