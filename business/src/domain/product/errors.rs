use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_quantity")]
    InvalidQuantity,
    #[error("product.malformed_record")]
    MalformedRecord,
    /// Collaborator failures pass through untouched.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
