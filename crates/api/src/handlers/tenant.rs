//! Handlers for the `/tenants` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use propman_core::pagination::resolve;
use propman_db::models::tenant::{CreateTenant, Tenant, TenantQuery, UpdateTenant};
use propman_db::repositories::TenantRepo;

use crate::error::{AppResult, StoreResultExt};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::middleware::auth::RequestContext;
use crate::response::ListResponse;
use crate::state::AppState;

const ENTITY: &str = "Tenant";

/// GET /tenants
pub async fn list(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedQuery(params): ValidatedQuery<TenantQuery>,
) -> AppResult<Json<ListResponse<Tenant>>> {
    let window = resolve(&params.page_request());
    let items = TenantRepo::list(&state.pool, &params, &window)
        .await
        .for_entity(ENTITY)?;
    let total = TenantRepo::count(&state.pool, &params)
        .await
        .for_entity(ENTITY)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, property_id = ?params.property_id, total, page = window.page, "Listed tenants");
    Ok(Json(ListResponse::new(items, total, &window)))
}

/// POST /tenants
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(input): ValidatedJson<CreateTenant>,
) -> AppResult<(StatusCode, Json<Tenant>)> {
    let tenant = TenantRepo::create(&state.pool, &input)
        .await
        .for_entity(ENTITY)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, tenant_id = %tenant.id, "Created tenant");
    Ok((StatusCode::CREATED, Json(tenant)))
}

/// GET /tenants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> AppResult<Json<Tenant>> {
    let tenant = TenantRepo::find_by_id(&state.pool, &id)
        .await
        .for_record(ENTITY, &id)?;

    tracing::debug!(user_id = %ctx.user_id, tenant_id = %tenant.id, "Fetched tenant");
    Ok(Json(tenant))
}

/// PATCH /tenants/{id}
pub async fn update(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateTenant>,
) -> AppResult<Json<Tenant>> {
    let tenant = TenantRepo::update(&state.pool, &id, &input)
        .await
        .for_record(ENTITY, &id)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, tenant_id = %tenant.id, "Updated tenant");
    Ok(Json(tenant))
}

/// POST /tenants/{id}/archive
pub async fn archive(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> AppResult<Json<Tenant>> {
    let tenant = TenantRepo::archive(&state.pool, &id)
        .await
        .for_record(ENTITY, &id)?;

    tracing::debug!(user_id = %ctx.user_id, org_id = ?ctx.org_id, tenant_id = %tenant.id, "Archived tenant");
    Ok(Json(tenant))
}
