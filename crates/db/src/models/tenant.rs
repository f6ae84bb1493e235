//! Tenant entity model and DTOs.

use propman_core::pagination::PageRequest;
use propman_core::patch::Patch;
use propman_core::types::{Date, EntityId, Timestamp};
use propman_core::validation::{validate_archival_clear, validate_email_or_empty, validate_frequency};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::query::{self, Assign, Filter};
use crate::row::{MapRow, RowSource};

/// A row from the `tenants` table.
#[derive(Debug, Clone, Serialize)]
pub struct Tenant {
    pub id: EntityId,
    pub name: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub phone: Option<String>,
    /// Rent is paid up over `paid_from..=paid_to`.
    pub paid_from: Date,
    pub paid_to: Date,
    pub rental_amount: f64,
    /// One of `weekly`, `fortnightly`, `monthly`.
    pub frequency: String,
    pub original_start_date: Date,
    pub start_date: Date,
    pub end_date: Date,
    pub termination_date: Option<Date>,
    pub termination_reason: Option<String>,
    pub vacate_date: Option<Date>,
    pub is_archived: Option<Timestamp>,
    pub property_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MapRow for Tenant {
    fn map_row<R: RowSource + ?Sized>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.uuid("id")?,
            name: row.text("name")?,
            email: row.opt_text("email")?,
            mobile: row.opt_text("mobile")?,
            phone: row.opt_text("phone")?,
            paid_from: row.date("paid_from")?,
            paid_to: row.date("paid_to")?,
            rental_amount: row.float("rental_amount")?,
            frequency: row.text("frequency")?,
            original_start_date: row.date("original_start_date")?,
            start_date: row.date("start_date")?,
            end_date: row.date("end_date")?,
            termination_date: row.opt_date("termination_date")?,
            termination_reason: row.opt_text("termination_reason")?,
            vacate_date: row.opt_date("vacate_date")?,
            is_archived: row.opt_timestamp("is_archived")?,
            property_id: row.uuid("property_id")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }
}

crate::impl_from_row!(Tenant);

/// DTO for creating a new tenant.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTenant {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub phone: Option<String>,
    pub paid_from: Date,
    pub paid_to: Date,
    #[validate(range(min = 0.0, message = "rental_amount must not be negative"))]
    pub rental_amount: f64,
    #[validate(
        length(min = 1, message = "frequency must not be empty"),
        custom(function = "validate_frequency")
    )]
    pub frequency: String,
    pub original_start_date: Date,
    pub start_date: Date,
    pub end_date: Date,
    pub property_id: EntityId,
}

/// DTO for updating an existing tenant.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTenant {
    pub name: Option<String>,
    #[validate(custom(function = "validate_email_or_empty"))]
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub phone: Option<String>,
    pub paid_from: Option<Date>,
    pub paid_to: Option<Date>,
    #[validate(range(min = 0.0, message = "rental_amount must not be negative"))]
    pub rental_amount: Option<f64>,
    #[validate(custom(function = "validate_frequency"))]
    pub frequency: Option<String>,
    pub original_start_date: Option<Date>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub termination_date: Option<Date>,
    pub termination_reason: Option<String>,
    pub vacate_date: Option<Date>,
    #[serde(default)]
    #[validate(custom(function = "validate_archival_clear"))]
    pub is_archived: Patch<Timestamp>,
}

impl UpdateTenant {
    pub fn assignments(&self) -> Vec<Assign<'_>> {
        vec![
            Assign::Text("name", self.name.as_deref()),
            Assign::Text("email", self.email.as_deref()),
            Assign::Text("mobile", self.mobile.as_deref()),
            Assign::Text("phone", self.phone.as_deref()),
            Assign::Value("paid_from", query::opt(self.paid_from)),
            Assign::Value("paid_to", query::opt(self.paid_to)),
            Assign::Value("rental_amount", query::opt(self.rental_amount)),
            Assign::Text("frequency", self.frequency.as_deref()),
            Assign::Value("original_start_date", query::opt(self.original_start_date)),
            Assign::Value("start_date", query::opt(self.start_date)),
            Assign::Value("end_date", query::opt(self.end_date)),
            Assign::Value("termination_date", query::opt(self.termination_date)),
            Assign::Text("termination_reason", self.termination_reason.as_deref()),
            Assign::Value("vacate_date", query::opt(self.vacate_date)),
            Assign::Nullable("is_archived", query::patch(&self.is_archived)),
        ]
    }
}

/// Query parameters for `GET /tenants`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TenantQuery {
    pub name: Option<String>,
    pub property_id: Option<EntityId>,
    pub archived_only: Option<bool>,
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<i64>,
}

impl TenantQuery {
    pub fn filters(&self) -> Vec<Filter<'_>> {
        vec![
            Filter::Contains("name", self.name.as_deref()),
            Filter::Equals("property_id", query::opt(self.property_id)),
            Filter::Archived("is_archived", self.archived_only),
        ]
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            limit: self.limit,
        }
    }
}
