//! Roster database operations
//!
//! Each module owns the queries for one table. Domain errors (not found,
//! duplicate names) are raised here so handlers stay thin.

pub mod clan;
pub mod kingdom;
pub mod member;

/// True when the sqlx error is a Postgres unique-constraint violation.
pub(crate) fn unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Unwrap the domain code of a failed operation; panics on infrastructure errors.
#[cfg(test)]
pub(crate) fn domain_code(err: crate::error::ServiceError) -> shared::error::ErrorCode {
    match err {
        crate::error::ServiceError::App(e) => e.code,
        crate::error::ServiceError::Db(e) => panic!("unexpected infrastructure error: {e}"),
    }
}
