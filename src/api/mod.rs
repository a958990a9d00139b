use axum::{Router, http::HeaderValue, middleware, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::constants::API_VERSION;
use crate::services::CatalogService;
use crate::state::SharedState;

mod episodes;
mod error;
mod observability;
mod sources;
mod subjects;
pub mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<dyn CatalogService> {
        &self.shared.catalog
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
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
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest(&format!("/{API_VERSION}"), catalog_router())
        .route("/metrics", get(observability::get_metrics))
        .fallback(error::not_found)
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_metrics))
}

fn catalog_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/subjects", get(subjects::list_subjects))
        .route("/subjects/{id}", get(subjects::get_subject))
        .route("/subjects/{id}/eps", get(subjects::get_subject))
        .route("/subjects/{id}/eps/{ep_id}", get(episodes::get_episode))
        .route(
            "/subjects/{id}/eps/{ep_id}/sources",
            get(episodes::list_episode_sources),
        )
        .route(
            "/subjects/{id}/eps/{ep_id}/sources/{service_id}",
            get(episodes::get_episode_source),
        )
        .route("/subjects/{id}/sources", get(sources::list_sources))
        .route(
            "/subjects/{id}/sources/{service_id}",
            get(sources::get_source),
        )
}
