//! Route definitions for the AssetDesk HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.uploads.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(asset_routes())
        .merge(user_routes())
        .merge(department_routes())
        .merge(location_routes())
        .merge(consumable_routes())
        .merge(license_routes())
        .merge(settings_routes())
        .merge(activity_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Asset CRUD, photo upload, and nested comments.
fn asset_routes() -> Router<AppState> {
    Router::new()
        .route("/assets", get(handlers::assets::list))
        .route("/assets", post(handlers::assets::create))
        .route("/assets/{id}", get(handlers::assets::get))
        .route("/assets/{id}", put(handlers::assets::update))
        .route("/assets/{id}", delete(handlers::assets::delete))
        .route("/assets/{id}/photo", post(handlers::assets::upload_photo))
        .route(
            "/assets/{id}/comments",
            get(handlers::comments::list_for_asset),
        )
        .route("/assets/{id}/comments", post(handlers::comments::create))
        .route("/comments/{id}", put(handlers::comments::update))
        .route("/comments/{id}", delete(handlers::comments::delete))
}

/// User CRUD, role assignment, and permission resolution.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::users::list))
        .route("/users", post(handlers::users::create))
        .route("/users/{id}", get(handlers::users::get))
        .route("/users/{id}", put(handlers::users::update))
        .route("/users/{id}", delete(handlers::users::delete))
        .route("/users/{id}/roles", get(handlers::users::list_roles))
        .route("/users/{id}/roles", post(handlers::users::assign_role))
        .route(
            "/users/{id}/roles/{role_id}",
            delete(handlers::users::revoke_role),
        )
        .route("/users/{id}/permissions", get(handlers::users::permissions))
}

/// Department CRUD.
fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(handlers::departments::list))
        .route("/departments", post(handlers::departments::create))
        .route("/departments/{id}", get(handlers::departments::get))
        .route("/departments/{id}", put(handlers::departments::update))
        .route("/departments/{id}", delete(handlers::departments::delete))
}

/// Location CRUD.
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(handlers::locations::list))
        .route("/locations", post(handlers::locations::create))
        .route("/locations/{id}", get(handlers::locations::get))
        .route("/locations/{id}", put(handlers::locations::update))
        .route("/locations/{id}", delete(handlers::locations::delete))
}

/// Consumable CRUD.
fn consumable_routes() -> Router<AppState> {
    Router::new()
        .route("/consumables", get(handlers::consumables::list))
        .route("/consumables", post(handlers::consumables::create))
        .route("/consumables/{id}", get(handlers::consumables::get))
        .route("/consumables/{id}", put(handlers::consumables::update))
        .route("/consumables/{id}", delete(handlers::consumables::delete))
}

/// License CRUD.
fn license_routes() -> Router<AppState> {
    Router::new()
        .route("/licenses", get(handlers::licenses::list))
        .route("/licenses", post(handlers::licenses::create))
        .route("/licenses/{id}", get(handlers::licenses::get))
        .route("/licenses/{id}", put(handlers::licenses::update))
        .route("/licenses/{id}", delete(handlers::licenses::delete))
}

/// Catalog management and dropdown options.
fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/settings/options", get(handlers::settings::options))
        .route("/settings/models", get(handlers::settings::list_models))
        .route("/settings/models", post(handlers::settings::create_model))
        .route(
            "/settings/models/{id}",
            delete(handlers::settings::delete_model),
        )
        .route(
            "/settings/manufacturers",
            get(handlers::settings::list_manufacturers),
        )
        .route(
            "/settings/manufacturers",
            post(handlers::settings::create_manufacturer),
        )
        .route(
            "/settings/manufacturers/{id}",
            delete(handlers::settings::delete_manufacturer),
        )
        .route(
            "/settings/categories",
            get(handlers::settings::list_categories),
        )
        .route(
            "/settings/categories",
            post(handlers::settings::create_category),
        )
        .route(
            "/settings/categories/{id}",
            delete(handlers::settings::delete_category),
        )
        .route(
            "/settings/status-labels",
            get(handlers::settings::list_status_labels),
        )
        .route(
            "/settings/status-labels",
            post(handlers::settings::create_status_label),
        )
        .route(
            "/settings/status-labels/{id}",
            delete(handlers::settings::delete_status_label),
        )
        .route(
            "/settings/suppliers",
            get(handlers::settings::list_suppliers),
        )
        .route(
            "/settings/suppliers",
            post(handlers::settings::create_supplier),
        )
        .route(
            "/settings/suppliers/{id}",
            delete(handlers::settings::delete_supplier),
        )
}

/// Activity log queries.
fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activity", get(handlers::activity::list))
        .route("/activity/{id}", get(handlers::activity::get))
}

/// Dashboard aggregation.
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard::summary))
}

/// Health checks.
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
