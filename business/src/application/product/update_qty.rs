use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_qty::{UpdateQtyParams, UpdateQtyUseCase};

pub struct UpdateQtyUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQtyUseCase for UpdateQtyUseCaseImpl {
    async fn execute(&self, params: UpdateQtyParams) -> Result<(), ProductError> {
        if params.qty < 0 {
            self.logger.warn(&format!(
                "Rejected negative quantity {} for product {}",
                params.qty, params.id
            ));
            return Err(ProductError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Updating quantity of product {} to {}",
            params.id, params.qty
        ));
        self.repository.update_qty(params.id, params.qty).await?;
        Ok(())
    }
}
