use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::student, error::AppError, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Registry API"),
    tags((name = "student", description = "Student record management"))
)]
pub struct ApiDoc;

/// Builds the application router with all API routes and the OpenAPI document.
///
/// The document is served at `/api-docs/openapi.json` and rendered by Swagger UI at
/// `/swagger-ui`. Unmatched paths fall through to a JSON 404.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(student::get_all_students, student::create_student))
        .routes(routes!(
            student::get_student_by_id,
            student::update_student,
            student::delete_student
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
