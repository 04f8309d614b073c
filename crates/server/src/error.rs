use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use prototyper_core::CoreError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    Database(db::DbError),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
            AppError::Database(db::DbError::PrototypeNotFound(id)) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("Prototype not found: {}", id),
            ),
            AppError::Database(err @ db::DbError::CorruptConfig { .. }) => {
                tracing::error!(error = %err, "Stored UI configuration is unreadable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "invalid_ui_config",
                    "Invalid UI configuration format".to_string(),
                )
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<db::DbError> for AppError {
    fn from(err: db::DbError) -> Self {
        AppError::Database(err)
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PrototypeNotFound(id) => {
                AppError::NotFound(format!("Prototype not found: {}", id))
            }
            CoreError::Validation(msg) => AppError::BadRequest(msg),
            CoreError::InvalidConfiguration(msg) => {
                tracing::error!(reason = %msg, "Stored UI configuration failed validation");
                AppError::Internal("Invalid UI configuration format".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_missing_prototype_is_not_found() {
        let response = AppError::from(db::DbError::PrototypeNotFound(Uuid::new_v4())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unreadable_config_is_internal_error() {
        let err = db::DbError::CorruptConfig {
            id: Uuid::new_v4().to_string(),
            reason: "expected value".to_string(),
        };
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_core_errors_map_to_status() {
        let response = AppError::from(CoreError::Validation("atmosphere cannot be empty".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            AppError::from(CoreError::InvalidConfiguration("no components".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
