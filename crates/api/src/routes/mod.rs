pub mod health;
pub mod landlord;
pub mod property;
pub mod tenant;

use axum::Router;

use crate::state::AppState;

/// Build the authenticated entity route tree.
///
/// ```text
/// /landlords     list, create, get, update, archive
/// /properties    list, create, get, update, archive
/// /tenants       list, create, get, update, archive
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/landlords", landlord::router())
        .nest("/properties", property::router())
        .nest("/tenants", tenant::router())
}
