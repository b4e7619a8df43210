//! Products API routes

use axum::Router;
use domain_catalog::{CatalogRepositories, CatalogService, ProductMapper, handlers};

use crate::state::AppState;

/// Create products router over the PostgreSQL repositories
pub fn router(state: &AppState) -> Router {
    let repositories = CatalogRepositories::postgres(state.db.clone());
    let service = CatalogService::new(repositories, ProductMapper::new(&state.config.api_url));
    handlers::router(service)
}
