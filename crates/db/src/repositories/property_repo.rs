//! Repository for the `properties` table.

use propman_core::pagination::Pagination;
use propman_core::types::new_entity_id;
use sqlx::PgPool;

use crate::models::property::{CreateProperty, Property, PropertyQuery, UpdateProperty};
use crate::query::{bind_values, bind_values_scalar, build_set, build_where};

/// Column list shared across queries. `full_address` is search-only.
const COLUMNS: &str = "id, street_number, street_name, suburb, state, postcode, country, \
    landlord_id, management_fee, management_gained, management_lost, \
    is_archived, created_at, updated_at";

/// Provides CRUD and archival operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property. `management_lost` always starts unset.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties
                (id, street_number, street_name, suburb, state, postcode, country,
                 landlord_id, management_fee, management_gained)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(new_entity_id())
            .bind(&input.street_number)
            .bind(&input.street_name)
            .bind(&input.suburb)
            .bind(&input.state)
            .bind(&input.postcode)
            .bind(&input.country)
            .bind(input.landlord_id)
            .bind(input.management_fee)
            .bind(input.management_gained)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Property, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1::uuid");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List one page of properties, ordered by street name then number.
    pub async fn list(
        pool: &PgPool,
        params: &PropertyQuery,
        window: &Pagination,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let filter = build_where(params.filters());
        let query = format!(
            "SELECT {COLUMNS} FROM properties {} \
             ORDER BY street_name ASC, street_number ASC \
             LIMIT ${} OFFSET ${}",
            filter.sql(),
            filter.next_index,
            filter.next_index + 1
        );
        bind_values(sqlx::query_as::<_, Property>(&query), &filter.binds)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, params: &PropertyQuery) -> Result<i64, sqlx::Error> {
        let filter = build_where(params.filters());
        let query = format!("SELECT COUNT(*)::BIGINT FROM properties {}", filter.sql());
        bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), &filter.binds)
            .fetch_one(pool)
            .await
    }

    /// Apply the supplied fields of `input`, or return the current row when
    /// nothing was supplied.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProperty,
    ) -> Result<Property, sqlx::Error> {
        let Some(set) = build_set(input.assignments()) else {
            return Self::find_by_id(pool, id).await;
        };
        let query = format!(
            "UPDATE properties {} WHERE id = ${}::uuid RETURNING {COLUMNS}",
            set.sql(),
            set.param_count() + 1
        );
        bind_values(sqlx::query_as::<_, Property>(&query), &set.binds)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn archive(pool: &PgPool, id: &str) -> Result<Property, sqlx::Error> {
        let query = format!(
            "UPDATE properties
             SET is_archived = COALESCE(is_archived, NOW()), updated_at = NOW()
             WHERE id = $1::uuid
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
