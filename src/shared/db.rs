use sea_orm::{DbErr, SqlErr};

/// True when the error comes from a UNIQUE constraint rejecting an insert.
///
/// Drivers that expose a SQLSTATE are matched through `sql_err()`; anything
/// else (mock connections, wrapped runtime errors) falls back to the message.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let message = err.to_string().to_lowercase();
    message.contains("23505")
        || message.contains("duplicate key")
        || message.contains("unique constraint")
}
