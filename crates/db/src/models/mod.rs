//! Entity structs and request DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct mapped from rows through [`MapRow`](crate::row::MapRow)
//! - A `Deserialize` + `Validate` create DTO
//! - A `Deserialize` + `Validate` update DTO (all fields optional) exposing
//!   its assignable columns for [`build_set`](crate::query::build_set)
//! - A `Deserialize` + `Validate` list query exposing its filters for
//!   [`build_where`](crate::query::build_where)

pub mod landlord;
pub mod property;
pub mod tenant;
