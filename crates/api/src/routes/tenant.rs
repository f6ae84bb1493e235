//! Route definitions for the `/tenants` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tenant;
use crate::state::AppState;

/// Routes mounted at `/tenants`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PATCH  /{id}             -> update
/// POST   /{id}/archive     -> archive
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tenant::list).post(tenant::create))
        .route("/{id}", get(tenant::get_by_id).patch(tenant::update))
        .route("/{id}/archive", post(tenant::archive))
}
