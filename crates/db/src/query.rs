//! Declarative builders for dynamically-shaped SQL fragments.
//!
//! List endpoints describe their filters and update endpoints describe their
//! assignable columns as ordered lists of (column, optional value, kind).
//! [`build_where`] and [`build_set`] turn those lists into parameterized
//! fragments with `$n` placeholders plus the values to bind, in order.
//!
//! Column names are always `&'static str` supplied by repository code, never
//! by the client, so they are interpolated directly.

use propman_core::patch::Patch;
use propman_core::types::{Date, EntityId, Timestamp};
use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::Postgres;

// ---------------------------------------------------------------------------
// Bind values
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Uuid(EntityId),
    Text(String),
    Float(f64),
    Date(Date),
    Timestamp(Timestamp),
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

impl From<EntityId> for BindValue {
    fn from(v: EntityId) -> Self {
        BindValue::Uuid(v)
    }
}

impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        BindValue::Float(v)
    }
}

impl From<Date> for BindValue {
    fn from(v: Date) -> Self {
        BindValue::Date(v)
    }
}

impl From<Timestamp> for BindValue {
    fn from(v: Timestamp) -> Self {
        BindValue::Timestamp(v)
    }
}

/// Lift an optional field into an optional bind value.
pub fn opt<T: Into<BindValue>>(value: Option<T>) -> Option<BindValue> {
    value.map(Into::into)
}

/// Lift a tri-state patch field into a tri-state bind value.
pub fn patch<T: Clone + Into<BindValue>>(value: &Patch<T>) -> Patch<BindValue> {
    match value {
        Patch::Missing => Patch::Missing,
        Patch::Null => Patch::Null,
        Patch::Value(v) => Patch::Value(v.clone().into()),
    }
}

// ---------------------------------------------------------------------------
// WHERE
// ---------------------------------------------------------------------------

/// One list filter.
#[derive(Debug, Clone)]
pub enum Filter<'a> {
    /// Case-insensitive substring match. Skipped when absent or empty.
    Contains(&'static str, Option<&'a str>),
    /// Equality match. Skipped when absent.
    Equals(&'static str, Option<BindValue>),
    /// Archival toggle on a nullable timestamp column: `Some(true)` selects
    /// archived rows, anything else selects active rows.
    Archived(&'static str, Option<bool>),
}

/// A built WHERE fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub conditions: Vec<String>,
    pub binds: Vec<BindValue>,
    /// Next unused 1-based placeholder index.
    pub next_index: usize,
}

impl WhereClause {
    /// `""` when there are no conditions, else `WHERE a AND b ...`.
    pub fn sql(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }
}

/// Build a WHERE fragment from filters, keeping their order.
pub fn build_where<'a>(filters: impl IntoIterator<Item = Filter<'a>>) -> WhereClause {
    let mut conditions = Vec::new();
    let mut binds = Vec::new();
    let mut bind_idx = 1usize;

    for filter in filters {
        match filter {
            Filter::Contains(column, Some(value)) if !value.is_empty() => {
                conditions.push(format!("{column} ILIKE ${bind_idx}"));
                binds.push(BindValue::Text(format!("%{value}%")));
                bind_idx += 1;
            }
            Filter::Contains(..) => {}
            Filter::Equals(column, Some(value)) => {
                conditions.push(format!("{column} = ${bind_idx}"));
                binds.push(value);
                bind_idx += 1;
            }
            Filter::Equals(_, None) => {}
            Filter::Archived(column, Some(true)) => {
                conditions.push(format!("{column} IS NOT NULL"));
            }
            Filter::Archived(column, _) => {
                conditions.push(format!("{column} IS NULL"));
            }
        }
    }

    WhereClause {
        conditions,
        binds,
        next_index: bind_idx,
    }
}

// ---------------------------------------------------------------------------
// SET
// ---------------------------------------------------------------------------

/// One assignable column of a partial update.
#[derive(Debug, Clone)]
pub enum Assign<'a> {
    /// String column. Skipped when absent or empty; an empty string never
    /// clears the column.
    Text(&'static str, Option<&'a str>),
    /// Numeric or date column. Skipped when absent.
    Value(&'static str, Option<BindValue>),
    /// Nullable column that can be cleared: missing is skipped, explicit
    /// null assigns `NULL`.
    Nullable(&'static str, Patch<BindValue>),
}

/// A built SET fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    /// `column = ...` items, ending with `updated_at = NOW()`.
    pub assignments: Vec<String>,
    pub binds: Vec<BindValue>,
}

impl SetClause {
    pub fn sql(&self) -> String {
        format!("SET {}", self.assignments.join(", "))
    }

    /// Number of `$n` placeholders used; the next free index is this plus one.
    pub fn param_count(&self) -> usize {
        self.binds.len()
    }
}

/// Build a SET fragment from assignable columns, keeping their order.
///
/// Returns `None` when nothing was supplied so callers never emit a bare
/// `SET`. Otherwise `updated_at = NOW()` is appended.
pub fn build_set<'a>(fields: impl IntoIterator<Item = Assign<'a>>) -> Option<SetClause> {
    let mut assignments = Vec::new();
    let mut binds = Vec::new();

    for field in fields {
        match field {
            Assign::Text(column, Some(value)) if !value.is_empty() => {
                binds.push(BindValue::Text(value.to_string()));
                assignments.push(format!("{column} = ${}", binds.len()));
            }
            Assign::Text(..) => {}
            Assign::Value(column, Some(value)) | Assign::Nullable(column, Patch::Value(value)) => {
                binds.push(value);
                assignments.push(format!("{column} = ${}", binds.len()));
            }
            Assign::Value(_, None) => {}
            Assign::Nullable(column, Patch::Null) => {
                assignments.push(format!("{column} = NULL"));
            }
            Assign::Nullable(_, Patch::Missing) => {}
        }
    }

    if assignments.is_empty() {
        return None;
    }
    assignments.push("updated_at = NOW()".to_string());

    Some(SetClause { assignments, binds })
}

// ---------------------------------------------------------------------------
// Binding
// ---------------------------------------------------------------------------

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub fn bind_values<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    bind_values: &'q [BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for val in bind_values {
        q = match val {
            BindValue::Uuid(v) => q.bind(*v),
            BindValue::Text(v) => q.bind(v.as_str()),
            BindValue::Float(v) => q.bind(*v),
            BindValue::Date(v) => q.bind(*v),
            BindValue::Timestamp(v) => q.bind(*v),
        };
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
pub fn bind_values_scalar<'q, O>(
    mut q: QueryScalar<'q, Postgres, O, PgArguments>,
    bind_values: &'q [BindValue],
) -> QueryScalar<'q, Postgres, O, PgArguments> {
    for val in bind_values {
        q = match val {
            BindValue::Uuid(v) => q.bind(*v),
            BindValue::Text(v) => q.bind(v.as_str()),
            BindValue::Float(v) => q.bind(*v),
            BindValue::Date(v) => q.bind(*v),
            BindValue::Timestamp(v) => q.bind(*v),
        };
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
