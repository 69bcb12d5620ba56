use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod characters;
mod error;
mod favorites;
mod observability;
mod planets;
mod starships;
pub mod system;
pub mod types;
mod users;
mod validation;

pub use error::{ApiError, Existing};
pub use types::*;

use crate::services::{
    CatalogService, FavoriteService, SeaOrmCatalogService, SeaOrmFavoriteService,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub catalog_service: Arc<dyn CatalogService>,

    pub favorite_service: Arc<dyn FavoriteService>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    let catalog_service = Arc::new(SeaOrmCatalogService::new(shared.store.clone()));
    let favorite_service = Arc::new(SeaOrmFavoriteService::new(shared.store.clone()));

    Arc::new(AppState {
        shared,
        catalog_service,
        favorite_service,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config().server.cors_allowed_origins;

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(system::sitemap))
        .route("/health/live", get(system::health_live))
        .route("/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
        .route("/user", get(users::hello))
        .route("/users", get(users::list_users))
        .route("/users/{user_id}/favorites", get(users::get_favorites))
        .route(
            "/characters",
            get(characters::list_characters).post(characters::create_character),
        )
        .route("/characters/{id}", get(characters::get_character))
        .route("/planets", get(planets::list_planets))
        .route("/planets/{id}", get(planets::get_planet))
        .route("/starships", get(starships::list_starships))
        .route("/starships/{id}", get(starships::get_starship))
        .route(
            "/favorite/{user_id}/planet/{planet_id}",
            post(favorites::add_planet).delete(favorites::remove_planet),
        )
        .route(
            "/favorite/{user_id}/character/{character_id}",
            post(favorites::add_character).delete(favorites::remove_character),
        )
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}
