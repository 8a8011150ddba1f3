//! Service-layer error type for keep-server
//!
//! Handlers and the `db` query modules both return `ServiceError`, so `?`
//! works across the two failure sources of this service: sqlx errors from
//! the roster tables, and domain errors that already carry an `ErrorCode`
//! (missing kingdom, duplicate clan name, short password, ...).

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// What a handler bubbles up when a roster operation fails.
#[derive(Debug)]
pub enum ServiceError {
    /// Infrastructure failure (pool, query, migration). Logged here, reported
    /// to the client only as `InternalError` with no detail.
    Db(BoxError),
    /// Domain rule violation; its `ErrorCode` goes to the client as-is.
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
