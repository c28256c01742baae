use axum::{extract::Request, middleware, routing::get, Router};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::openapi::{openapi_json, OPENAPI_PATH};
use crate::handlers::user_handlers::{
    create_user, delete_user, get_user, get_user_by_email, get_users, update_user,
};
use roster_shared::error::Result;
use roster_shared::service::UserService;
use roster_shared::store::schema::DatabaseInitializer;
use roster_shared::store::sqlite::{create_pool, SqlUserRepository};
use roster_shared::store::UserRepository;

/// Creates a router backed by the SQLite repository
///
/// Ensures the schema exists before returning, so the first request never
/// races table creation.
pub async fn create_router(config: &Config) -> Result<Router> {
    info!("Creating router with SQLite repository");

    let pool = create_pool(&config.database_url, config.max_connections)?;

    let outcome = DatabaseInitializer::new(pool.clone()).initialize().await?;
    info!("Database initialization finished: {:?}", outcome);

    let repository = Arc::new(SqlUserRepository::new(pool));

    info!("Using API route prefix: '{}'", config.route_prefix);
    Ok(create_router_with_repository(repository, &config.route_prefix))
}

/// Creates a router with a given repository implementation
pub fn create_router_with_repository<R>(repository: Arc<R>, prefix: &str) -> Router
where
    R: UserRepository,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    let service = Arc::new(UserService::new(repository));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    // Create the API routes
    let api_routes = Router::new()
        .route("/users", get(get_users::<R>).post(create_user::<R>))
        .route(
            "/users/:id",
            get(get_user::<R>)
                .put(update_user::<R>)
                .delete(delete_user::<R>),
        )
        .route("/users/email/:email", get(get_user_by_email::<R>))
        .with_state(service);

    let router = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(prefix, api_routes)
    };

    // The API document is not affected by the prefix
    let router = router.route(OPENAPI_PATH, get(openapi_json));

    // Add a fallback handler for 404s
    router
        .fallback(|req: Request| async move {
            warn!("No route matched for: {} {}", req.method(), req.uri());
            (
                axum::http::StatusCode::NOT_FOUND,
                "The requested resource was not found".to_string(),
            )
        })
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
