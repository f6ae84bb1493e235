//! Repository round trips for landlords, properties, and tenants.

mod common;

use assert_matches::assert_matches;
use common::{date, new_tenant, seed_landlord, seed_property, seed_tenant};
use propman_core::pagination::{resolve, PageRequest};
use propman_db::error::{classify, StoreErrorKind};
use propman_db::models::landlord::{LandlordQuery, UpdateLandlord};
use propman_db::models::property::{PropertyQuery, UpdateProperty};
use propman_db::models::tenant::{TenantQuery, UpdateTenant};
use propman_db::repositories::{LandlordRepo, PropertyRepo, TenantRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Landlords
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_landlord(pool: PgPool) {
    let created = seed_landlord(&pool, "Acme Pty Ltd").await;
    assert_eq!(created.id.get_version_num(), 7);
    assert!(created.is_archived.is_none());

    let found = LandlordRepo::find_by_id(&pool, &created.id.to_string())
        .await
        .unwrap();
    assert_eq!(found.name, "Acme Pty Ltd");
    assert_eq!(found.email.as_deref(), Some("owner@example.com"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_and_malformed_ids_classify(pool: PgPool) {
    let unknown = uuid::Uuid::now_v7().to_string();
    let err = LandlordRepo::find_by_id(&pool, &unknown).await.unwrap_err();
    assert_eq!(classify(&err), StoreErrorKind::NotFound);

    let err = LandlordRepo::find_by_id(&pool, "not-a-uuid").await.unwrap_err();
    assert_eq!(classify(&err), StoreErrorKind::InvalidIdentifier);

    let err = LandlordRepo::archive(&pool, "not-a-uuid").await.unwrap_err();
    assert_eq!(classify(&err), StoreErrorKind::InvalidIdentifier);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_changes_only_supplied_fields(pool: PgPool) {
    let landlord = seed_landlord(&pool, "Before").await;
    let input = UpdateLandlord {
        name: Some("After".to_string()),
        email: Some(String::new()),
        ..Default::default()
    };

    let updated = LandlordRepo::update(&pool, &landlord.id.to_string(), &input)
        .await
        .unwrap();
    assert_eq!(updated.name, "After");
    assert_eq!(updated.email.as_deref(), Some("owner@example.com"));
    assert_eq!(updated.suburb.as_deref(), Some("Melbourne"));
    assert!(updated.updated_at >= landlord.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_update_returns_current_row(pool: PgPool) {
    let landlord = seed_landlord(&pool, "Unchanged").await;
    let updated = LandlordRepo::update(&pool, &landlord.id.to_string(), &UpdateLandlord::default())
        .await
        .unwrap();
    assert_eq!(updated.name, "Unchanged");
    assert_eq!(updated.updated_at, landlord.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_update_of_unknown_id_is_not_found(pool: PgPool) {
    let err = LandlordRepo::update(
        &pool,
        &uuid::Uuid::now_v7().to_string(),
        &UpdateLandlord::default(),
    )
    .await
    .unwrap_err();
    assert_matches!(err, sqlx::Error::RowNotFound);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_landlord_list_pages_and_counts(pool: PgPool) {
    for i in 0..12 {
        seed_landlord(&pool, &format!("Landlord {i:02}")).await;
    }
    let params = LandlordQuery {
        page: Some(2),
        limit: Some(5),
        ..Default::default()
    };
    let window = resolve(&params.page_request());

    let page = LandlordRepo::list(&pool, &params, &window).await.unwrap();
    let total = LandlordRepo::count(&pool, &params).await.unwrap();

    assert_eq!(total, 12);
    let names: Vec<_> = page.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Landlord 05", "Landlord 06", "Landlord 07", "Landlord 08", "Landlord 09"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_landlord_name_filter_is_case_insensitive(pool: PgPool) {
    seed_landlord(&pool, "Brookfield Holdings").await;
    seed_landlord(&pool, "Riverside Trust").await;

    let params = LandlordQuery {
        name: Some("BROOK".to_string()),
        ..Default::default()
    };
    let window = resolve(&PageRequest::default());
    let rows = LandlordRepo::list(&pool, &params, &window).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Brookfield Holdings");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_property_filters_by_address_and_landlord(pool: PgPool) {
    let owner = seed_landlord(&pool, "Owner").await;
    let other = seed_landlord(&pool, "Other").await;
    seed_property(&pool, owner.id, "12", "Sydney Rd").await;
    seed_property(&pool, owner.id, "3", "Lygon St").await;
    seed_property(&pool, other.id, "40", "Sydney Rd").await;
    let window = resolve(&PageRequest::default());

    let by_address = PropertyQuery {
        address: Some("sydney rd".to_string()),
        ..Default::default()
    };
    assert_eq!(PropertyRepo::count(&pool, &by_address).await.unwrap(), 2);

    let by_owner = PropertyQuery {
        address: Some("Sydney".to_string()),
        landlord_id: Some(owner.id),
        ..Default::default()
    };
    let rows = PropertyRepo::list(&pool, &by_owner, &window).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].street_number, "12");

    let all_for_owner = PropertyQuery {
        landlord_id: Some(owner.id),
        ..Default::default()
    };
    let streets: Vec<_> = PropertyRepo::list(&pool, &all_for_owner, &window)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.street_name)
        .collect();
    assert_eq!(streets, vec!["Lygon St", "Sydney Rd"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_property_update_sets_management_lost(pool: PgPool) {
    let owner = seed_landlord(&pool, "Owner").await;
    let property = seed_property(&pool, owner.id, "7", "High St").await;
    assert!(property.management_lost.is_none());

    let input = UpdateProperty {
        management_fee: Some(6.0),
        management_lost: Some(date(2025, 6, 30)),
        ..Default::default()
    };
    let updated = PropertyRepo::update(&pool, &property.id.to_string(), &input)
        .await
        .unwrap();
    assert_eq!(updated.management_fee, 6.0);
    assert_eq!(updated.management_lost, Some(date(2025, 6, 30)));
    assert_eq!(updated.street_name, "High St");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_property_with_unknown_landlord_is_internal(pool: PgPool) {
    let input = common::new_property(uuid::Uuid::now_v7(), "1", "Nowhere Rd");
    let err = PropertyRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(classify(&err), StoreErrorKind::Internal);
}

// ---------------------------------------------------------------------------
// Tenants
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tenant_create_stores_distinct_paid_dates(pool: PgPool) {
    let owner = seed_landlord(&pool, "Owner").await;
    let property = seed_property(&pool, owner.id, "9", "Park St").await;

    let tenant = seed_tenant(&pool, property.id, "Sam Renter").await;
    assert_eq!(tenant.paid_from, date(2024, 3, 1));
    assert_eq!(tenant.paid_to, date(2024, 3, 14));
    assert!(tenant.termination_date.is_none());
    assert_eq!(tenant.frequency, "fortnightly");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tenant_termination_round_trips(pool: PgPool) {
    let owner = seed_landlord(&pool, "Owner").await;
    let property = seed_property(&pool, owner.id, "9", "Park St").await;
    let tenant = seed_tenant(&pool, property.id, "Leaving Soon").await;

    let input = UpdateTenant {
        termination_date: Some(date(2024, 8, 15)),
        termination_reason: Some("Relocating".to_string()),
        vacate_date: Some(date(2024, 8, 20)),
        ..Default::default()
    };
    let updated = TenantRepo::update(&pool, &tenant.id.to_string(), &input)
        .await
        .unwrap();
    assert_eq!(updated.termination_date, Some(date(2024, 8, 15)));
    assert_eq!(updated.termination_reason.as_deref(), Some("Relocating"));

    let found = TenantRepo::find_by_id(&pool, &tenant.id.to_string())
        .await
        .unwrap();
    assert_eq!(found.vacate_date, Some(date(2024, 8, 20)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tenants_filter_by_property(pool: PgPool) {
    let owner = seed_landlord(&pool, "Owner").await;
    let first = seed_property(&pool, owner.id, "1", "A St").await;
    let second = seed_property(&pool, owner.id, "2", "B St").await;
    seed_tenant(&pool, first.id, "Alice").await;
    seed_tenant(&pool, second.id, "Bob").await;
    TenantRepo::create(&pool, &new_tenant(first.id, "Carol"))
        .await
        .unwrap();

    let params = TenantQuery {
        property_id: Some(first.id),
        ..Default::default()
    };
    let rows = TenantRepo::list(&pool, &params, &resolve(&PageRequest::default()))
        .await
        .unwrap();
    let names: Vec<_> = rows.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Carol"]);
}
