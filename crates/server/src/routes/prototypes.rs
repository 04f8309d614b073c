use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use prototyper_core::{
    generate, AnswerSet, CreatePrototypeRequest, Prototype, UiConfiguration,
    UpdatePrototypeRequest,
};
use uuid::Uuid;

use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/prototypes",
    responses(
        (status = 200, description = "List of all prototypes, newest first", body = Vec<Prototype>)
    ),
    tag = "prototypes"
)]
pub async fn list_prototypes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Prototype>>, AppError> {
    let prototypes = state.prototype_repository.find_all().await?;
    Ok(Json(prototypes))
}

#[utoipa::path(
    post,
    path = "/api/prototypes",
    request_body = CreatePrototypeRequest,
    responses(
        (status = 201, description = "Prototype created with a generated UI configuration", body = Prototype),
        (status = 400, description = "An answer is empty", body = ErrorResponse)
    ),
    tag = "prototypes"
)]
pub async fn create_prototype(
    State(state): State<AppState>,
    Json(payload): Json<CreatePrototypeRequest>,
) -> Result<(StatusCode, Json<Prototype>), AppError> {
    payload.validate()?;

    let prototype = Prototype::new(payload.into_answers());
    let created = state.prototype_repository.create(&prototype).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/prototypes/{id}",
    params(
        ("id" = Uuid, Path, description = "Prototype ID")
    ),
    responses(
        (status = 200, description = "Prototype found", body = Prototype),
        (status = 404, description = "Prototype not found", body = ErrorResponse)
    ),
    tag = "prototypes"
)]
pub async fn get_prototype(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Prototype>, AppError> {
    let prototype = state.prototype_repository.find_by_id(id).await?;

    match prototype {
        Some(p) => Ok(Json(p)),
        None => Err(AppError::NotFound(format!("Prototype not found: {}", id))),
    }
}

#[utoipa::path(
    patch,
    path = "/api/prototypes/{id}",
    params(
        ("id" = Uuid, Path, description = "Prototype ID")
    ),
    request_body = UpdatePrototypeRequest,
    responses(
        (status = 200, description = "Prototype updated; UI configuration regenerated if any answer changed", body = Prototype),
        (status = 400, description = "A provided answer is empty", body = ErrorResponse),
        (status = 404, description = "Prototype not found", body = ErrorResponse)
    ),
    tag = "prototypes"
)]
pub async fn update_prototype(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePrototypeRequest>,
) -> Result<Json<Prototype>, AppError> {
    payload.validate()?;

    let updated = state.prototype_repository.update(id, &payload).await?;

    match updated {
        Some(p) => Ok(Json(p)),
        None => Err(AppError::NotFound(format!("Prototype not found: {}", id))),
    }
}

#[utoipa::path(
    delete,
    path = "/api/prototypes/{id}",
    params(
        ("id" = Uuid, Path, description = "Prototype ID")
    ),
    responses(
        (status = 204, description = "Prototype deleted"),
        (status = 404, description = "Prototype not found", body = ErrorResponse)
    ),
    tag = "prototypes"
)]
pub async fn delete_prototype(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = state.prototype_repository.delete(id).await?;

    if deleted {
        tracing::info!(prototype_id = %id, "Prototype deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Prototype not found: {}", id)))
    }
}

/// Returns the stored configuration after checking it against the schema.
#[utoipa::path(
    get,
    path = "/api/prototypes/{id}/preview",
    params(
        ("id" = Uuid, Path, description = "Prototype ID")
    ),
    responses(
        (status = 200, description = "UI configuration ready to render", body = UiConfiguration),
        (status = 404, description = "Prototype not found", body = ErrorResponse),
        (status = 500, description = "Stored configuration is invalid", body = ErrorResponse)
    ),
    tag = "prototypes"
)]
pub async fn preview_prototype(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UiConfiguration>, AppError> {
    let prototype = state.prototype_repository.get(id).await?;
    prototype.ui_config.validate()?;
    Ok(Json(prototype.ui_config))
}

/// Runs the generator without storing anything.
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = AnswerSet,
    responses(
        (status = 200, description = "Generated UI configuration", body = UiConfiguration),
        (status = 400, description = "An answer is empty", body = ErrorResponse)
    ),
    tag = "prototypes"
)]
pub async fn generate_preview(
    Json(answers): Json<AnswerSet>,
) -> Result<Json<UiConfiguration>, AppError> {
    answers.validate()?;
    Ok(Json(generate(&answers)))
}
