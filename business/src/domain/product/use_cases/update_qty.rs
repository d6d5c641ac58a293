use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct UpdateQtyParams {
    pub id: i64,
    pub qty: i64,
}

#[async_trait]
pub trait UpdateQtyUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQtyParams) -> Result<(), ProductError>;
}
