//! Route definitions for the `/landlords` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::landlord;
use crate::state::AppState;

/// Routes mounted at `/landlords`.
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
        .route("/", get(landlord::list).post(landlord::create))
        .route("/{id}", get(landlord::get_by_id).patch(landlord::update))
        .route("/{id}/archive", post(landlord::archive))
}
