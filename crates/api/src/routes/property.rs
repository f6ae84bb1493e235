//! Route definitions for the `/properties` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// Routes mounted at `/properties`.
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
        .route("/", get(property::list).post(property::create))
        .route("/{id}", get(property::get_by_id).patch(property::update))
        .route("/{id}/archive", post(property::archive))
}
