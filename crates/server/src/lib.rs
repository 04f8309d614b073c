pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Prototyper API",
        version = "0.1.0",
        description = "Turns five answers about a product idea into a clickable UI prototype"
    ),
    paths(
        routes::health_check,
        routes::list_prototypes,
        routes::create_prototype,
        routes::get_prototype,
        routes::update_prototype,
        routes::delete_prototype,
        routes::preview_prototype,
        routes::generate_preview,
    ),
    components(schemas(
        routes::HealthResponse,
        error::ErrorResponse,
        prototyper_core::AnswerSet,
        prototyper_core::CreatePrototypeRequest,
        prototyper_core::UpdatePrototypeRequest,
        prototyper_core::Prototype,
        prototyper_core::UiConfiguration,
        prototyper_core::UiComponent,
        prototyper_core::ComponentKind,
        prototyper_core::Layout,
        prototyper_core::Theme,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "prototypes", description = "Prototype management and UI generation"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let app_dir = state.app_dir.clone();

    let api_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health_check))
        .route(
            "/api/prototypes",
            get(routes::list_prototypes).post(routes::create_prototype),
        )
        .route(
            "/api/prototypes/{id}",
            get(routes::get_prototype)
                .patch(routes::update_prototype)
                .delete(routes::delete_prototype),
        )
        .route(
            "/api/prototypes/{id}/preview",
            get(routes::preview_prototype),
        )
        .route("/api/generate", post(routes::generate_preview))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    if let Some(app_dir) = app_dir {
        let index_file = app_dir.join("index.html");
        let serve_dir = ServeDir::new(&app_dir).not_found_service(ServeFile::new(&index_file));
        api_router.fallback_service(serve_dir)
    } else {
        api_router
    }
}
