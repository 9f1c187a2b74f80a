pub mod store;
pub mod view;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Store operation failed: {0}")]
    StoreError(String),
    #[error("Serialization failed: {0}")]
    SerializationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
