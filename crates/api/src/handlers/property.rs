//! Handlers for the `/properties` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use propman_core::pagination::resolve;
use propman_db::models::property::{CreateProperty, Property, PropertyQuery, UpdateProperty};
use propman_db::repositories::PropertyRepo;

use crate::error::{AppResult, StoreResultExt};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::middleware::auth::RequestContext;
use crate::response::ListResponse;
use crate::state::AppState;

const ENTITY: &str = "Property";

/// GET /properties
pub async fn list(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedQuery(params): ValidatedQuery<PropertyQuery>,
) -> AppResult<Json<ListResponse<Property>>> {
    let window = resolve(&params.page_request());
    let items = PropertyRepo::list(&state.pool, &params, &window)
        .await
        .for_entity(ENTITY)?;
    let total = PropertyRepo::count(&state.pool, &params)
        .await
        .for_entity(ENTITY)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, landlord_id = ?params.landlord_id, total, page = window.page, "Listed properties");
    Ok(Json(ListResponse::new(items, total, &window)))
}

/// POST /properties
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(input): ValidatedJson<CreateProperty>,
) -> AppResult<(StatusCode, Json<Property>)> {
    let property = PropertyRepo::create(&state.pool, &input)
        .await
        .for_entity(ENTITY)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, property_id = %property.id, "Created property");
    Ok((StatusCode::CREATED, Json(property)))
}

/// GET /properties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::find_by_id(&state.pool, &id)
        .await
        .for_record(ENTITY, &id)?;

    tracing::debug!(user_id = %ctx.user_id, property_id = %property.id, "Fetched property");
    Ok(Json(property))
}

/// PATCH /properties/{id}
pub async fn update(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateProperty>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::update(&state.pool, &id, &input)
        .await
        .for_record(ENTITY, &id)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, property_id = %property.id, "Updated property");
    Ok(Json(property))
}

/// POST /properties/{id}/archive
pub async fn archive(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::archive(&state.pool, &id)
        .await
        .for_record(ENTITY, &id)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, property_id = %property.id, "Archived property");
    Ok(Json(property))
}
