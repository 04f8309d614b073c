use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Prototype not found: {0}")]
    PrototypeNotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid UI configuration: {0}")]
    InvalidConfiguration(String),
}
