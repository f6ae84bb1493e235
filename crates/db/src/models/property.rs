//! Property entity model and DTOs.

use propman_core::pagination::PageRequest;
use propman_core::patch::Patch;
use propman_core::types::{Date, EntityId, Timestamp};
use propman_core::validation::validate_archival_clear;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::query::{self, Assign, Filter};
use crate::row::{MapRow, RowSource};

/// A row from the `properties` table.
///
/// The stored `full_address` column exists only for address search and is
/// not part of the entity.
#[derive(Debug, Clone, Serialize)]
pub struct Property {
    pub id: EntityId,
    pub street_number: String,
    pub street_name: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub landlord_id: EntityId,
    pub management_fee: f64,
    pub management_gained: Date,
    pub management_lost: Option<Date>,
    pub is_archived: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MapRow for Property {
    fn map_row<R: RowSource + ?Sized>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.uuid("id")?,
            street_number: row.text("street_number")?,
            street_name: row.text("street_name")?,
            suburb: row.text("suburb")?,
            state: row.text("state")?,
            postcode: row.text("postcode")?,
            country: row.text("country")?,
            landlord_id: row.uuid("landlord_id")?,
            management_fee: row.float("management_fee")?,
            management_gained: row.date("management_gained")?,
            management_lost: row.opt_date("management_lost")?,
            is_archived: row.opt_timestamp("is_archived")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }
}

crate::impl_from_row!(Property);

/// DTO for creating a new property.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProperty {
    #[validate(length(min = 1, message = "street_number must not be empty"))]
    pub street_number: String,
    #[validate(length(min = 1, message = "street_name must not be empty"))]
    pub street_name: String,
    #[validate(length(min = 1, message = "suburb must not be empty"))]
    pub suburb: String,
    #[validate(length(min = 1, message = "state must not be empty"))]
    pub state: String,
    #[validate(length(min = 1, message = "postcode must not be empty"))]
    pub postcode: String,
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
    pub landlord_id: EntityId,
    #[validate(range(min = 0.0, message = "management_fee must not be negative"))]
    pub management_fee: f64,
    pub management_gained: Date,
}

/// DTO for updating an existing property.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProperty {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[validate(range(min = 0.0, message = "management_fee must not be negative"))]
    pub management_fee: Option<f64>,
    pub management_gained: Option<Date>,
    pub management_lost: Option<Date>,
    #[serde(default)]
    #[validate(custom(function = "validate_archival_clear"))]
    pub is_archived: Patch<Timestamp>,
}

impl UpdateProperty {
    pub fn assignments(&self) -> Vec<Assign<'_>> {
        vec![
            Assign::Text("street_number", self.street_number.as_deref()),
            Assign::Text("street_name", self.street_name.as_deref()),
            Assign::Text("suburb", self.suburb.as_deref()),
            Assign::Text("postcode", self.postcode.as_deref()),
            Assign::Text("state", self.state.as_deref()),
            Assign::Text("country", self.country.as_deref()),
            Assign::Value("management_fee", query::opt(self.management_fee)),
            Assign::Value("management_gained", query::opt(self.management_gained)),
            Assign::Value("management_lost", query::opt(self.management_lost)),
            Assign::Nullable("is_archived", query::patch(&self.is_archived)),
        ]
    }
}

/// Query parameters for `GET /properties`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PropertyQuery {
    /// Case-insensitive substring of the composed street address.
    pub address: Option<String>,
    pub landlord_id: Option<EntityId>,
    pub archived_only: Option<bool>,
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<i64>,
}

impl PropertyQuery {
    pub fn filters(&self) -> Vec<Filter<'_>> {
        vec![
            Filter::Contains("full_address", self.address.as_deref()),
            Filter::Equals("landlord_id", query::opt(self.landlord_id)),
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
