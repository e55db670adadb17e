pub mod allocations;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::AllocationStore;

pub struct AppState {
    pub store: AllocationStore,
}

/// Builds the full route surface with middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/allocations", get(allocations::list_allocations))
        .route("/decomposer_ip", post(allocations::create_allocation))
        .route("/editer/:adresse", get(allocations::edit_page))
        .route(
            "/enregistrer_edition/:adresse",
            post(allocations::save_edit),
        )
        .route("/supprimer/:adresse", get(allocations::delete_allocation))
        .route(
            "/afficher_base_de_donnees",
            get(allocations::dump_table),
        )
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn health_check() -> &'static str {
    "OK"
}
