//! Handlers for the `/landlords` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use propman_core::pagination::resolve;
use propman_db::models::landlord::{CreateLandlord, Landlord, LandlordQuery, UpdateLandlord};
use propman_db::repositories::LandlordRepo;

use crate::error::{AppResult, StoreResultExt};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::middleware::auth::RequestContext;
use crate::response::ListResponse;
use crate::state::AppState;

const ENTITY: &str = "Landlord";

/// GET /landlords
pub async fn list(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedQuery(params): ValidatedQuery<LandlordQuery>,
) -> AppResult<Json<ListResponse<Landlord>>> {
    let window = resolve(&params.page_request());
    let items = LandlordRepo::list(&state.pool, &params, &window)
        .await
        .for_entity(ENTITY)?;
    let total = LandlordRepo::count(&state.pool, &params)
        .await
        .for_entity(ENTITY)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, total, page = window.page, "Listed landlords");
    Ok(Json(ListResponse::new(items, total, &window)))
}

/// POST /landlords
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(input): ValidatedJson<CreateLandlord>,
) -> AppResult<(StatusCode, Json<Landlord>)> {
    let landlord = LandlordRepo::create(&state.pool, &input)
        .await
        .for_entity(ENTITY)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, landlord_id = %landlord.id, "Created landlord");
    Ok((StatusCode::CREATED, Json(landlord)))
}

/// GET /landlords/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> AppResult<Json<Landlord>> {
    let landlord = LandlordRepo::find_by_id(&state.pool, &id)
        .await
        .for_record(ENTITY, &id)?;

    tracing::debug!(user_id = %ctx.user_id, landlord_id = %landlord.id, "Fetched landlord");
    Ok(Json(landlord))
}

/// PATCH /landlords/{id}
pub async fn update(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateLandlord>,
) -> AppResult<Json<Landlord>> {
    let landlord = LandlordRepo::update(&state.pool, &id, &input)
        .await
        .for_record(ENTITY, &id)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, landlord_id = %landlord.id, "Updated landlord");
    Ok(Json(landlord))
}

/// POST /landlords/{id}/archive
pub async fn archive(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> AppResult<Json<Landlord>> {
    let landlord = LandlordRepo::archive(&state.pool, &id)
        .await
        .for_record(ENTITY, &id)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, landlord_id = %landlord.id, "Archived landlord");
    Ok(Json(landlord))
}
