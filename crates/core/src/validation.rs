//! Field validators plugged into `#[validate(custom(...))]` on request DTOs.
//!
//! Update payloads treat an empty string as "not supplied", so the string
//! validators here let `""` through and leave presence checks to
//! `length(min = 1)` on create payloads.

use std::borrow::Cow;

use validator::{ValidateEmail, ValidationError};

use crate::patch::Patch;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Rent frequency
// ---------------------------------------------------------------------------

/// Rent payment frequencies accepted on tenant records.
pub const RENT_FREQUENCIES: &[&str] = &["weekly", "fortnightly", "monthly"];

/// Check whether a rent frequency is recognised.
pub fn is_valid_frequency(frequency: &str) -> bool {
    RENT_FREQUENCIES.contains(&frequency)
}

pub fn validate_frequency(frequency: &str) -> Result<(), ValidationError> {
    if frequency.is_empty() || is_valid_frequency(frequency) {
        return Ok(());
    }
    Err(error(
        "frequency",
        format!("frequency must be one of: {}", RENT_FREQUENCIES.join(", ")),
    ))
}

// ---------------------------------------------------------------------------
// Contact details
// ---------------------------------------------------------------------------

pub fn validate_email_or_empty(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        return Ok(());
    }
    Err(error("email", "email must be a valid email address"))
}

// ---------------------------------------------------------------------------
// Archival
// ---------------------------------------------------------------------------

/// Update payloads may clear `is_archived` with an explicit `null` but never
/// set it; archiving goes through the dedicated archive operation so the
/// timestamp always comes from the database clock.
pub fn validate_archival_clear(value: &Patch<Timestamp>) -> Result<(), ValidationError> {
    match value {
        Patch::Missing | Patch::Null => Ok(()),
        Patch::Value(_) => Err(error(
            "is_archived",
            "is_archived can only be cleared with null; use the archive operation to archive",
        )),
    }
}

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}
