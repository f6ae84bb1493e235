//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use propman_db::models::landlord::{CreateLandlord, Landlord};
use propman_db::models::property::{CreateProperty, Property};
use propman_db::models::tenant::{CreateTenant, Tenant};
use propman_db::repositories::{LandlordRepo, PropertyRepo, TenantRepo};
use sqlx::PgPool;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_landlord(name: &str) -> CreateLandlord {
    CreateLandlord {
        name: name.to_string(),
        email: Some("owner@example.com".to_string()),
        mobile: None,
        phone: None,
        address_line_1: Some("1 Collins St".to_string()),
        address_line_2: None,
        suburb: Some("Melbourne".to_string()),
        postcode: Some("3000".to_string()),
        state: Some("VIC".to_string()),
        country: Some("Australia".to_string()),
    }
}

pub fn new_property(landlord_id: uuid::Uuid, number: &str, street: &str) -> CreateProperty {
    CreateProperty {
        street_number: number.to_string(),
        street_name: street.to_string(),
        suburb: "Brunswick".to_string(),
        state: "VIC".to_string(),
        postcode: "3056".to_string(),
        country: "Australia".to_string(),
        landlord_id,
        management_fee: 5.5,
        management_gained: date(2024, 1, 1),
    }
}

pub fn new_tenant(property_id: uuid::Uuid, name: &str) -> CreateTenant {
    CreateTenant {
        name: name.to_string(),
        email: None,
        mobile: Some("0400 000 000".to_string()),
        phone: None,
        paid_from: date(2024, 3, 1),
        paid_to: date(2024, 3, 14),
        rental_amount: 550.0,
        frequency: "fortnightly".to_string(),
        original_start_date: date(2023, 7, 1),
        start_date: date(2024, 1, 1),
        end_date: date(2024, 12, 31),
        property_id,
    }
}

pub async fn seed_landlord(pool: &PgPool, name: &str) -> Landlord {
    LandlordRepo::create(pool, &new_landlord(name)).await.unwrap()
}

pub async fn seed_property(pool: &PgPool, landlord_id: uuid::Uuid, number: &str, street: &str) -> Property {
    PropertyRepo::create(pool, &new_property(landlord_id, number, street))
        .await
        .unwrap()
}

pub async fn seed_tenant(pool: &PgPool, property_id: uuid::Uuid, name: &str) -> Tenant {
    TenantRepo::create(pool, &new_tenant(property_id, name)).await.unwrap()
}
