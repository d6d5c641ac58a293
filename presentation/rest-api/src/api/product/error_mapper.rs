use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::InvalidQuantity | ProductError::MalformedRecord => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            ProductError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ProductError::Repository(RepositoryError::Duplicated) => {
                (StatusCode::CONFLICT, "Conflict")
            }
            ProductError::Repository(RepositoryError::Persistence) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Unavailable")
            }
            ProductError::Repository(RepositoryError::DatabaseError) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
