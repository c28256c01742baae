use axum::Json;
use utoipa::OpenApi;

use roster_shared::models::{ErrorResponse, User};

/// Path the API document is served from, outside any route prefix
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation for the user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Repository Pattern Demo API",
        version = "v1",
        description = "CRUD over users stored in SQLite."
    ),
    tags(
        (name = "Users", description = "User CRUD endpoints")
    ),
    paths(
        crate::handlers::user_handlers::get_users,
        crate::handlers::user_handlers::get_user,
        crate::handlers::user_handlers::get_user_by_email,
        crate::handlers::user_handlers::create_user,
        crate::handlers::user_handlers::update_user,
        crate::handlers::user_handlers::delete_user
    ),
    components(schemas(User, ErrorResponse))
)]
pub struct ApiDoc;

// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
