/// Errors signalled by the persistence collaborator.
/// Messages are code-style identifiers so callers can translate them.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The store could not be reached (connection, pool or I/O failure).
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    /// The store was reached but rejected or failed the statement.
    #[error("repository.database_error")]
    DatabaseError,
}
