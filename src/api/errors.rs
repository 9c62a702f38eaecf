//! # Client-facing error contract
//!
//! Every failure that reaches a caller is one of the stable categories
//! in `ErrorKind`, carried by a `DataError` descriptor. Gateway failures
//! classify by their upstream exception name through a finite dispatch
//! table (see ERRORS.md for the full contract); boundary validation
//! failures are BAD_REQUEST-class and never reach the executors.
//!
//! Classification happens exactly once, here. Executors never catch or
//! reinterpret gateway failures, and the original failure is retained as
//! the descriptor's source, never serialized to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::GatewayError;

/// Result type for data operations
pub type DataResult<T> = Result<T, DataError>;

/// Stable error categories
///
/// One row per category: code, canonical message, retry advisability,
/// HTTP status (the number in the message prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Paused database is waking up
    DatabaseResuming,
    /// Statement exceeded the gateway's execution window
    QueryTimeout,
    /// Database temporarily unreachable
    DatabaseUnavailable,
    /// Credential secret is unusable
    ConnectionError,
    /// Named logical database does not exist
    DatabaseNotFound,
    /// Invalid SQL or parameters, or a malformed request
    BadRequest,
    /// Statement failed inside the database engine
    SqlError,
    /// Caller lacks permission
    AccessDenied,
    /// Gateway's data API is not enabled for the resource
    ConfigurationError,
    /// Gateway service outage
    ServiceUnavailable,
    /// Internal gateway failure
    InternalError,
    /// Anything unrecognized
    Unknown,
}

impl ErrorKind {
    /// Classify an upstream failure name
    ///
    /// Total: unrecognized names land in `Unknown`.
    pub fn classify(name: &str) -> Self {
        match name {
            "DatabaseResumingException" => ErrorKind::DatabaseResuming,
            "StatementTimeoutException" => ErrorKind::QueryTimeout,
            "DatabaseUnavailableException" => ErrorKind::DatabaseUnavailable,
            "InvalidSecretException" => ErrorKind::ConnectionError,
            "DatabaseNotFoundException" => ErrorKind::DatabaseNotFound,
            "BadRequestException" => ErrorKind::BadRequest,
            "DatabaseErrorException" => ErrorKind::SqlError,
            "AccessDeniedException" | "ForbiddenException" => ErrorKind::AccessDenied,
            "HttpEndpointNotEnabledException" => ErrorKind::ConfigurationError,
            "ServiceUnavailableError" => ErrorKind::ServiceUnavailable,
            "InternalServerErrorException" => ErrorKind::InternalError,
            _ => ErrorKind::Unknown,
        }
    }

    /// Stable code string
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::DatabaseResuming => "DATABASE_RESUMING",
            ErrorKind::QueryTimeout => "QUERY_TIMEOUT",
            ErrorKind::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            ErrorKind::ConnectionError => "CONNECTION_ERROR",
            ErrorKind::DatabaseNotFound => "DATABASE_NOT_FOUND",
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::SqlError => "SQL_ERROR",
            ErrorKind::AccessDenied => "ACCESS_DENIED",
            ErrorKind::ConfigurationError => "CONFIGURATION_ERROR",
            ErrorKind::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorKind::InternalError => "INTERNAL_ERROR",
            ErrorKind::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Canonical client-facing message
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::DatabaseResuming => {
                "503: Database is starting up, please retry in a few seconds"
            }
            ErrorKind::QueryTimeout => {
                "504: Query timeout - please try simplifying your query or adding more specific filters"
            }
            ErrorKind::DatabaseUnavailable => {
                "503: Database is temporarily unavailable, please retry"
            }
            ErrorKind::ConnectionError => "400: Database connection configuration error",
            ErrorKind::DatabaseNotFound => {
                "400: Database configuration error - database not found"
            }
            ErrorKind::BadRequest => "400: Invalid SQL statement or parameters",
            ErrorKind::SqlError => {
                "400: Error executing SQL statement - please check your query syntax"
            }
            ErrorKind::AccessDenied => "400: Insufficient permissions",
            ErrorKind::ConfigurationError => "500: Database HTTP endpoint is not enabled",
            ErrorKind::ServiceUnavailable => "503: Database service is temporarily unavailable",
            ErrorKind::InternalError => "500: Internal database error, please retry",
            ErrorKind::Unknown => {
                "400: An unexpected error occurred while processing your request"
            }
        }
    }

    /// Whether the caller is advised to retry
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::DatabaseResuming
                | ErrorKind::DatabaseUnavailable
                | ErrorKind::ServiceUnavailable
                | ErrorKind::InternalError
        )
    }

    /// HTTP status served for this category
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::DatabaseResuming
            | ErrorKind::DatabaseUnavailable
            | ErrorKind::ServiceUnavailable => 503,
            ErrorKind::QueryTimeout => 504,
            ErrorKind::ConfigurationError | ErrorKind::InternalError => 500,
            ErrorKind::ConnectionError
            | ErrorKind::DatabaseNotFound
            | ErrorKind::BadRequest
            | ErrorKind::SqlError
            | ErrorKind::AccessDenied
            | ErrorKind::Unknown => 400,
        }
    }
}

/// Client-facing error descriptor
///
/// Immutable once constructed. `message` is the canonical category text
/// for mapped gateway failures and a "400: "-prefixed detail for
/// boundary validation failures.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct DataError {
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Option<GatewayError>,
}

impl DataError {
    /// Map a gateway failure through the taxonomy
    ///
    /// The failure is retained as the descriptor's source.
    pub fn from_gateway(cause: GatewayError) -> Self {
        let kind = ErrorKind::classify(cause.classification_key());
        Self {
            kind,
            message: kind.message().to_string(),
            cause: Some(cause),
        }
    }

    /// Build a BAD_REQUEST-class boundary validation failure
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::BadRequest,
            message: format!("400: {}", detail.into()),
            cause: None,
        }
    }

    /// The error category
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable code string
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Client-facing message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the caller is advised to retry
    pub fn retryable(&self) -> bool {
        self.kind.retryable()
    }

    /// HTTP status served for this error
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// The original gateway failure, when one exists
    pub fn cause(&self) -> Option<&GatewayError> {
        self.cause.as_ref()
    }
}

impl From<GatewayError> for DataError {
    fn from(cause: GatewayError) -> Self {
        Self::from_gateway(cause)
    }
}

/// Error response body
///
/// The only error shape clients ever see; the cause stays server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

impl ErrorBody {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("error body serialization cannot fail")
    }
}

impl From<&DataError> for ErrorBody {
    fn from(err: &DataError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message().to_string(),
            retryable: err.retryable(),
        }
    }
}

impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
        let body = Json(ErrorBody::from(&self));
        (status, body).into_response()
    }
}
