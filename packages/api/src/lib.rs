use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Assembles the full application router. Kept separate from `main` so
/// integration tests can drive the router in-process.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    // ToDo: Tighten this up
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::auth::routes())
        .merge(routes::user::routes())
        .merge(routes::live::routes())
        .merge(routes::invitation::routes())
        .merge(routes::game::routes())
        .layer(cors)
        .with_state(state)
}
