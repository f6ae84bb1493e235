//! Domain primitives shared by the database and API crates.
//!
//! Nothing in here touches the network or the database; everything is pure
//! and unit-tested in place.

pub mod error;
pub mod pagination;
pub mod patch;
pub mod types;
pub mod validation;
