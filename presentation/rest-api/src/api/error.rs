use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. "ValidationError"
    pub name: String,
    /// Code-style message, e.g. "product.invalid_quantity"
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
