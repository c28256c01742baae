use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

// Helper function to map sqlx errors, tagged with the failing operation
pub fn map_sqlx_error(operation: &str, err: sqlx::Error) -> ServiceError {
    ServiceError::StorageError(format!("SQLite {} error: {}", operation, err))
}
