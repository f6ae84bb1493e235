//! Repository for the `tenants` table.

use propman_core::pagination::Pagination;
use propman_core::types::new_entity_id;
use sqlx::PgPool;

use crate::models::tenant::{CreateTenant, Tenant, TenantQuery, UpdateTenant};
use crate::query::{bind_values, bind_values_scalar, build_set, build_where};

const COLUMNS: &str = "id, name, email, mobile, phone, paid_from, paid_to, rental_amount, \
    frequency, original_start_date, start_date, end_date, termination_date, \
    termination_reason, vacate_date, is_archived, property_id, created_at, updated_at";

/// Provides CRUD and archival operations for tenants.
pub struct TenantRepo;

impl TenantRepo {
    /// Insert a new tenant. Termination and vacate details start unset.
    pub async fn create(pool: &PgPool, input: &CreateTenant) -> Result<Tenant, sqlx::Error> {
        let query = format!(
            "INSERT INTO tenants
                (id, name, email, mobile, phone, paid_from, paid_to, rental_amount,
                 frequency, original_start_date, start_date, end_date, property_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(new_entity_id())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.mobile)
            .bind(&input.phone)
            .bind(input.paid_from)
            .bind(input.paid_to)
            .bind(input.rental_amount)
            .bind(&input.frequency)
            .bind(input.original_start_date)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.property_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Tenant, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE id = $1::uuid");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &TenantQuery,
        window: &Pagination,
    ) -> Result<Vec<Tenant>, sqlx::Error> {
        let filter = build_where(params.filters());
        let query = format!(
            "SELECT {COLUMNS} FROM tenants {} \
             ORDER BY name ASC \
             LIMIT ${} OFFSET ${}",
            filter.sql(),
            filter.next_index,
            filter.next_index + 1
        );
        bind_values(sqlx::query_as::<_, Tenant>(&query), &filter.binds)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, params: &TenantQuery) -> Result<i64, sqlx::Error> {
        let filter = build_where(params.filters());
        let query = format!("SELECT COUNT(*)::BIGINT FROM tenants {}", filter.sql());
        bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), &filter.binds)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: &str, input: &UpdateTenant) -> Result<Tenant, sqlx::Error> {
        let Some(set) = build_set(input.assignments()) else {
            return Self::find_by_id(pool, id).await;
        };
        let query = format!(
            "UPDATE tenants {} WHERE id = ${}::uuid RETURNING {COLUMNS}",
            set.sql(),
            set.param_count() + 1
        );
        bind_values(sqlx::query_as::<_, Tenant>(&query), &set.binds)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn archive(pool: &PgPool, id: &str) -> Result<Tenant, sqlx::Error> {
        let query = format!(
            "UPDATE tenants
             SET is_archived = COALESCE(is_archived, NOW()), updated_at = NOW()
             WHERE id = $1::uuid
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
