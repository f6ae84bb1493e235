//! Row-mapping contract.
//!
//! Entities map themselves from anything that can hand out typed columns by
//! name ([`RowSource`]), not from a concrete row type. The same mapping code
//! runs for `fetch_one`, `fetch_all`, and in-memory rows in unit tests.
//! [`impl_from_row!`](crate::impl_from_row) bridges a [`MapRow`] entity into
//! `sqlx::FromRow` so it works with `sqlx::query_as`.

use propman_core::types::{Date, EntityId, Timestamp};
use sqlx::postgres::PgRow;
use sqlx::Row;

/// Typed, by-name column access.
///
/// Nullable columns have `opt_*` getters returning `None` for SQL `NULL`.
pub trait RowSource {
    fn uuid(&self, column: &str) -> Result<EntityId, sqlx::Error>;
    fn text(&self, column: &str) -> Result<String, sqlx::Error>;
    fn opt_text(&self, column: &str) -> Result<Option<String>, sqlx::Error>;
    fn float(&self, column: &str) -> Result<f64, sqlx::Error>;
    fn date(&self, column: &str) -> Result<Date, sqlx::Error>;
    fn opt_date(&self, column: &str) -> Result<Option<Date>, sqlx::Error>;
    fn timestamp(&self, column: &str) -> Result<Timestamp, sqlx::Error>;
    fn opt_timestamp(&self, column: &str) -> Result<Option<Timestamp>, sqlx::Error>;
}

/// An entity that can be built from a [`RowSource`].
pub trait MapRow: Sized {
    fn map_row<R: RowSource + ?Sized>(row: &R) -> Result<Self, sqlx::Error>;
}

impl RowSource for PgRow {
    fn uuid(&self, column: &str) -> Result<EntityId, sqlx::Error> {
        self.try_get(column)
    }

    fn text(&self, column: &str) -> Result<String, sqlx::Error> {
        self.try_get(column)
    }

    fn opt_text(&self, column: &str) -> Result<Option<String>, sqlx::Error> {
        self.try_get(column)
    }

    fn float(&self, column: &str) -> Result<f64, sqlx::Error> {
        self.try_get(column)
    }

    fn date(&self, column: &str) -> Result<Date, sqlx::Error> {
        self.try_get(column)
    }

    fn opt_date(&self, column: &str) -> Result<Option<Date>, sqlx::Error> {
        self.try_get(column)
    }

    fn timestamp(&self, column: &str) -> Result<Timestamp, sqlx::Error> {
        self.try_get(column)
    }

    fn opt_timestamp(&self, column: &str) -> Result<Option<Timestamp>, sqlx::Error> {
        self.try_get(column)
    }
}

/// Implement `sqlx::FromRow<'_, PgRow>` for [`MapRow`] entities.
#[macro_export]
macro_rules! impl_from_row {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl<'r> ::sqlx::FromRow<'r, ::sqlx::postgres::PgRow> for $entity {
                fn from_row(row: &'r ::sqlx::postgres::PgRow) -> Result<Self, ::sqlx::Error> {
                    <$entity as $crate::row::MapRow>::map_row(row)
                }
            }
        )+
    };
}
