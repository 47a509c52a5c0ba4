use super::exception::Exception;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use deadpool_postgres::PoolError;
use std::error::Error as StdError;
use tokio_postgres::Error as TokioPostgresError;

/// Failure of any persistence operation.
///
/// Handlers return it with `?`; actix-web turns it into a response through
/// [`ResponseError`] and the error handlers in `config::error_handlers` log it.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("{}", with_causes(.0))]
    Pool(#[from] PoolError),
    #[error("{}", with_causes(.0))]
    TokioPostgres(#[from] TokioPostgresError),
    #[error("{0}")]
    QueryBuild(String),
}

impl From<anyhow::Error> for PersistenceError {
    fn from(error: anyhow::Error) -> Self {
        PersistenceError::QueryBuild(error.to_string())
    }
}

/// Message of `error` followed by every cause not already part of it.
///
/// tokio-postgres keeps the server message (`ERROR: invalid input syntax ...`)
/// in the source, its own `Display` only says `db error`.
fn with_causes(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

/// The connection itself failed, as opposed to the query or the row decoding.
fn is_connection_error(error: &TokioPostgresError) -> bool {
    error.is_closed()
        || error
            .source()
            .is_some_and(|cause| cause.is::<std::io::Error>())
}

impl PersistenceError {
    /// Name of the collaborator that failed, used as the key of the error body.
    fn data(&self) -> &'static str {
        match self {
            PersistenceError::Pool(_) | PersistenceError::TokioPostgres(_) => "database",
            PersistenceError::QueryBuild(_) => "server",
        }
    }
}

impl ResponseError for PersistenceError {
    fn status_code(&self) -> StatusCode {
        match self {
            PersistenceError::Pool(_) => StatusCode::SERVICE_UNAVAILABLE,
            PersistenceError::TokioPostgres(e) if is_connection_error(e) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            PersistenceError::TokioPostgres(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PersistenceError::QueryBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let data = String::from(self.data());
        match self.status_code() {
            StatusCode::SERVICE_UNAVAILABLE => {
                Exception::service_unavailable(data, self.to_string())
            }
            _ => Exception::internal_server_error(data, self.to_string()),
        }
    }
}
