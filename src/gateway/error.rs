//! Gateway failure type

use thiserror::Error;

/// Classification key used when a failure carries neither a name nor a
/// code
pub const UNKNOWN_FAILURE: &str = "UnknownError";

/// Failure raised during a gateway interaction
///
/// Carries the upstream identifiers the error taxonomy classifies on.
/// Transport-level failures (connect, timeout, undecodable body) have no
/// name and fall into the taxonomy's default row.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct GatewayError {
    /// Upstream exception name, e.g. `BadRequestException`
    pub name: Option<String>,
    /// Upstream error code, consulted when no name is present
    pub code: Option<String>,
    /// Human-readable upstream message
    pub message: String,
    /// HTTP status observed on the transport, when one was received
    pub status: Option<u16>,
}

impl GatewayError {
    /// Build a failure with an upstream exception name
    pub fn named(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            code: None,
            message: message.into(),
            status: None,
        }
    }

    /// Build a transport-level failure with no upstream identifier
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            name: None,
            code: None,
            message: message.into(),
            status: None,
        }
    }

    /// Attach the HTTP status the transport observed
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Key the error taxonomy classifies on: the declared name, falling
    /// back to the code, falling back to `UnknownError`
    pub fn classification_key(&self) -> &str {
        self.name
            .as_deref()
            .or(self.code.as_deref())
            .unwrap_or(UNKNOWN_FAILURE)
    }
}
