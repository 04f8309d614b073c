use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored UI configuration for prototype {id} is unreadable: {reason}")]
    CorruptConfig { id: String, reason: String },

    #[error("Prototype not found: {0}")]
    PrototypeNotFound(Uuid),
}
