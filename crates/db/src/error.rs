//! Classification of storage errors into the small set of outcomes the HTTP
//! layer distinguishes.

/// PostgreSQL SQLSTATE for `invalid_text_representation`, raised when a
/// text parameter cannot be cast to the column type (e.g. a malformed UUID).
pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Storage outcome categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// A point lookup matched no row.
    NotFound,
    /// The supplied identifier is not valid for the identifier type.
    InvalidIdentifier,
    /// Anything else.
    Internal,
}

/// Classify a sqlx error.
///
/// - `RowNotFound` is [`StoreErrorKind::NotFound`].
/// - A database error with SQLSTATE `22P02` is [`StoreErrorKind::InvalidIdentifier`].
/// - Everything else is [`StoreErrorKind::Internal`].
pub fn classify(err: &sqlx::Error) -> StoreErrorKind {
    match err {
        sqlx::Error::RowNotFound => StoreErrorKind::NotFound,
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(INVALID_TEXT_REPRESENTATION) =>
        {
            StoreErrorKind::InvalidIdentifier
        }
        _ => StoreErrorKind::Internal,
    }
}
