//! Mapping of PostgreSQL constraint violations onto client-facing errors

use jobboard_core::AppError;
use sqlx::error::ErrorKind;

/// Map a write error: unique violations become `Conflict(unique_message)`,
/// foreign-key violations become `fk_error`, everything else stays a database error.
pub(crate) fn map_write_error(
    err: sqlx::Error,
    unique_message: &str,
    fk_error: impl FnOnce() -> AppError,
) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.kind() {
            ErrorKind::UniqueViolation => return AppError::Conflict(unique_message.to_string()),
            ErrorKind::ForeignKeyViolation => return fk_error(),
            _ => {}
        }
    }
    AppError::Database(err)
}
