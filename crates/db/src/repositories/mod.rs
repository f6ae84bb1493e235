//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and return raw `sqlx::Error`s for
//! the API layer to classify.
//!
//! Path identifiers arrive as text and are cast with `$1::uuid` in SQL, so a
//! malformed id surfaces as SQLSTATE `22P02` and an unknown one as
//! `RowNotFound`.

pub mod landlord_repo;
pub mod property_repo;
pub mod tenant_repo;

pub use landlord_repo::LandlordRepo;
pub use property_repo::PropertyRepo;
pub use tenant_repo::TenantRepo;
