//! Mapping of `sqlx` failures onto [`CoreError`].

use redpen_core::error::CoreError;

/// Classify a sqlx error for the store boundary.
///
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to `Conflict`.
/// - Everything else maps to `Internal` and is logged.
pub fn classify_sqlx_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(format!("Database error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_internal() {
        let err = classify_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, CoreError::Internal(_)));
    }
}
