use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::record::ProductRecord;
use business::domain::product::use_cases::add::AddProductUseCase;
use business::domain::product::use_cases::get::{GetProductParams, GetProductUseCase};
use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::update_qty::{UpdateQtyParams, UpdateQtyUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{AddProductRequest, ProductResponse, UpdateQtyRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_use_case: Arc<dyn GetProductUseCase>,
    add_use_case: Arc<dyn AddProductUseCase>,
    update_qty_use_case: Arc<dyn UpdateQtyUseCase>,
}

impl ProductApi {
    pub fn new(
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_use_case: Arc<dyn GetProductUseCase>,
        add_use_case: Arc<dyn AddProductUseCase>,
        update_qty_use_case: Arc<dyn UpdateQtyUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            get_use_case,
            add_use_case,
            update_qty_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product in the order the store yields them.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self) -> ListProductsResponse {
        match self.list_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => ListProductsResponse::ServiceUnavailable(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product(&self, id: Path<i64>) -> GetProductResponse {
        match self
            .get_use_case
            .execute(GetProductParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    503 => GetProductResponse::ServiceUnavailable(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product
    ///
    /// Stores the supplied fields as they are. No field is required.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn add_product(&self, body: Json<AddProductRequest>) -> AddProductResponse {
        let record = match ProductRecord::try_from(body.0) {
            Ok(record) => record,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return AddProductResponse::BadRequest(json);
            }
        };

        match self.add_use_case.execute(record).await {
            Ok(()) => AddProductResponse::Created,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddProductResponse::BadRequest(json),
                    409 => AddProductResponse::Conflict(json),
                    503 => AddProductResponse::ServiceUnavailable(json),
                    _ => AddProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product's quantity
    ///
    /// Rejects negative quantities.
    #[oai(path = "/products/:id/qty", method = "put", tag = "ApiTags::Products")]
    async fn update_qty(&self, id: Path<i64>, body: Json<UpdateQtyRequest>) -> UpdateQtyResponse {
        match self
            .update_qty_use_case
            .execute(UpdateQtyParams {
                id: id.0,
                qty: body.0.qty,
            })
            .await
        {
            Ok(()) => UpdateQtyResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateQtyResponse::BadRequest(json),
                    404 => UpdateQtyResponse::NotFound(json),
                    503 => UpdateQtyResponse::ServiceUnavailable(json),
                    _ => UpdateQtyResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateQtyResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
