//! Repository for the `landlords` table.

use propman_core::pagination::Pagination;
use propman_core::types::new_entity_id;
use sqlx::PgPool;

use crate::models::landlord::{CreateLandlord, Landlord, LandlordQuery, UpdateLandlord};
use crate::query::{bind_values, bind_values_scalar, build_set, build_where};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, mobile, phone, address_line_1, address_line_2, \
    suburb, postcode, state, country, is_archived, created_at, updated_at";

/// Provides CRUD and archival operations for landlords.
pub struct LandlordRepo;

impl LandlordRepo {
    /// Insert a new landlord with a freshly generated id, returning the row.
    pub async fn create(pool: &PgPool, input: &CreateLandlord) -> Result<Landlord, sqlx::Error> {
        let query = format!(
            "INSERT INTO landlords
                (id, name, email, mobile, phone, address_line_1, address_line_2,
                 suburb, postcode, state, country)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Landlord>(&query)
            .bind(new_entity_id())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.mobile)
            .bind(&input.phone)
            .bind(&input.address_line_1)
            .bind(&input.address_line_2)
            .bind(&input.suburb)
            .bind(&input.postcode)
            .bind(&input.state)
            .bind(&input.country)
            .fetch_one(pool)
            .await
    }

    /// Find a landlord by id, archived or not.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Landlord, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM landlords WHERE id = $1::uuid");
        sqlx::query_as::<_, Landlord>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List one page of landlords matching `params`, ordered by name.
    pub async fn list(
        pool: &PgPool,
        params: &LandlordQuery,
        window: &Pagination,
    ) -> Result<Vec<Landlord>, sqlx::Error> {
        let filter = build_where(params.filters());
        let query = format!(
            "SELECT {COLUMNS} FROM landlords {} \
             ORDER BY name ASC \
             LIMIT ${} OFFSET ${}",
            filter.sql(),
            filter.next_index,
            filter.next_index + 1
        );
        bind_values(sqlx::query_as::<_, Landlord>(&query), &filter.binds)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(pool)
            .await
    }

    /// Count all landlords matching `params`, ignoring pagination.
    pub async fn count(pool: &PgPool, params: &LandlordQuery) -> Result<i64, sqlx::Error> {
        let filter = build_where(params.filters());
        let query = format!("SELECT COUNT(*)::BIGINT FROM landlords {}", filter.sql());
        bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), &filter.binds)
            .fetch_one(pool)
            .await
    }

    /// Apply the supplied fields of `input`. With nothing supplied the
    /// current row is returned unchanged.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateLandlord,
    ) -> Result<Landlord, sqlx::Error> {
        let Some(set) = build_set(input.assignments()) else {
            return Self::find_by_id(pool, id).await;
        };
        let query = format!(
            "UPDATE landlords {} WHERE id = ${}::uuid RETURNING {COLUMNS}",
            set.sql(),
            set.param_count() + 1
        );
        bind_values(sqlx::query_as::<_, Landlord>(&query), &set.binds)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Mark a landlord archived. Archiving an archived landlord keeps the
    /// original archived-at time.
    pub async fn archive(pool: &PgPool, id: &str) -> Result<Landlord, sqlx::Error> {
        let query = format!(
            "UPDATE landlords
             SET is_archived = COALESCE(is_archived, NOW()), updated_at = NOW()
             WHERE id = $1::uuid
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Landlord>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
