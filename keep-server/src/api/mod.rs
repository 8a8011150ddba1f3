//! API routes for keep-server

pub mod clan;
pub mod health;
pub mod kingdom;
pub mod member;

use axum::routing::{get, patch, post};
use axum::Router;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::state::AppState;

pub type ApiResult<T> = Result<axum::Json<T>, ServiceError>;

/// Create the combined router
pub fn create_router(state: AppState, cors_origin: &str) -> Router {
    let kingdoms = Router::new()
        .route(
            "/api/kingdoms",
            get(kingdom::list_kingdoms).post(kingdom::create_kingdom),
        )
        .route(
            "/api/kingdoms/{kingdom_id}",
            get(kingdom::get_kingdom).delete(kingdom::delete_kingdom),
        )
        .route(
            "/api/kingdoms/{kingdom_id}/clans",
            get(clan::list_clans).post(clan::create_clan),
        );

    let clans = Router::new()
        .route(
            "/api/clans/{clan_id}",
            get(clan::get_clan)
                .patch(clan::update_clan)
                .delete(clan::delete_clan),
        )
        .route("/api/clans/{clan_id}/members", post(member::create_member))
        .route(
            "/api/clans/{clan_id}/members/{member_id}",
            patch(member::update_member).delete(member::delete_member),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .merge(kingdoms)
        .merge(clans)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
        .with_state(state)
}

/// CORS for the frontend dev server. An unparseable origin falls back to
/// allow-any so a misconfigured env var fails open in development rather
/// than silently blocking the UI.
fn cors_layer(origin: &str) -> CorsLayer {
    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(origin, "Invalid CORS_ALLOWED_ORIGIN, allowing any origin");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
