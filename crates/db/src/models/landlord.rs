//! Landlord entity model and DTOs.

use propman_core::pagination::PageRequest;
use propman_core::patch::Patch;
use propman_core::types::{EntityId, Timestamp};
use propman_core::validation::{validate_archival_clear, validate_email_or_empty};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::query::{self, Assign, Filter};
use crate::row::{MapRow, RowSource};

/// A row from the `landlords` table.
#[derive(Debug, Clone, Serialize)]
pub struct Landlord {
    pub id: EntityId,
    pub name: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub phone: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// Archived-at time; `None` while active.
    pub is_archived: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MapRow for Landlord {
    fn map_row<R: RowSource + ?Sized>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.uuid("id")?,
            name: row.text("name")?,
            email: row.opt_text("email")?,
            mobile: row.opt_text("mobile")?,
            phone: row.opt_text("phone")?,
            address_line_1: row.opt_text("address_line_1")?,
            address_line_2: row.opt_text("address_line_2")?,
            suburb: row.opt_text("suburb")?,
            postcode: row.opt_text("postcode")?,
            state: row.opt_text("state")?,
            country: row.opt_text("country")?,
            is_archived: row.opt_timestamp("is_archived")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }
}

crate::impl_from_row!(Landlord);

/// DTO for creating a new landlord.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLandlord {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub phone: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// DTO for updating an existing landlord. All fields are optional; empty
/// strings count as not supplied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLandlord {
    pub name: Option<String>,
    #[validate(custom(function = "validate_email_or_empty"))]
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub phone: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// Omitted leaves archival untouched; `null` reactivates.
    #[serde(default)]
    #[validate(custom(function = "validate_archival_clear"))]
    pub is_archived: Patch<Timestamp>,
}

impl UpdateLandlord {
    /// Assignable columns in SET order.
    pub fn assignments(&self) -> Vec<Assign<'_>> {
        vec![
            Assign::Text("name", self.name.as_deref()),
            Assign::Text("email", self.email.as_deref()),
            Assign::Text("mobile", self.mobile.as_deref()),
            Assign::Text("phone", self.phone.as_deref()),
            Assign::Text("address_line_1", self.address_line_1.as_deref()),
            Assign::Text("address_line_2", self.address_line_2.as_deref()),
            Assign::Text("suburb", self.suburb.as_deref()),
            Assign::Text("postcode", self.postcode.as_deref()),
            Assign::Text("state", self.state.as_deref()),
            Assign::Text("country", self.country.as_deref()),
            Assign::Nullable("is_archived", query::patch(&self.is_archived)),
        ]
    }
}

/// Query parameters for `GET /landlords`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LandlordQuery {
    /// Case-insensitive substring of the landlord name.
    pub name: Option<String>,
    /// `true` lists archived landlords only; otherwise active ones.
    pub archived_only: Option<bool>,
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<i64>,
}

impl LandlordQuery {
    pub fn filters(&self) -> Vec<Filter<'_>> {
        vec![
            Filter::Contains("name", self.name.as_deref()),
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
