use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::add::AddProductUseCaseImpl;
use business::application::product::get::GetProductUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update_qty::UpdateQtyUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_qty_use_case = Arc::new(UpdateQtyUseCaseImpl {
            repository: product_repository,
            logger,
        });

        Self {
            health_api: HealthApi,
            product_api: ProductApi::new(
                list_use_case,
                get_use_case,
                add_use_case,
                update_qty_use_case,
            ),
        }
    }
}
