//! Transport-agnostic error payload.
//!
//! Handlers and stores return this error; the inbound HTTP adapter maps the
//! [`ErrorCode`] to a status code and serialises the payload as the response
//! body.

use crate::domain::ports::RepositoryError;
use crate::domain::validation::ValidationError;
use crate::middleware::trace::TraceId;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

/// Response header carrying the request correlation identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Stable machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request payload fails one or more field constraints.
    InvalidRequest,
    /// A caller-supplied identifier is already taken at creation time.
    IdentifierConflict,
    /// An update targets an identifier absent from the store.
    IdentifierNotFound,
    /// An unexpected error occurred on the server.
    InternalError,
}

/// API error response payload.
///
/// # Examples
/// ```
/// use filmorate::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_request("name must not be blank");
/// assert_eq!(err.code, ErrorCode::InvalidRequest);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: ErrorCode,
    /// Human-readable error message.
    #[schema(example = "payload failed validation")]
    pub message: String,
    /// Correlation identifier for tracing this error across systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    pub trace_id: Option<String>,
    /// Supplementary structured details, e.g. the list of violated field
    /// constraints on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier when one
    /// is in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use filmorate::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "name" }));
    /// assert!(err.details.is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::IdentifierConflict`].
    pub fn identifier_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IdentifierConflict, message)
    }

    /// Convenience constructor for [`ErrorCode::IdentifierNotFound`].
    pub fn identifier_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IdentifierNotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::invalid_request("payload failed validation")
            .with_details(json!({ "violations": err.violations }))
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::IdentifierConflict { .. } => {
                Self::identifier_conflict(err.to_string())
            }
            RepositoryError::IdentifierNotFound { .. } => {
                Self::identifier_not_found(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::Violations;

    #[test]
    fn error_codes_serialise_as_snake_case() {
        let cases = [
            (ErrorCode::InvalidRequest, "invalid_request"),
            (ErrorCode::IdentifierConflict, "identifier_conflict"),
            (ErrorCode::IdentifierNotFound, "identifier_not_found"),
            (ErrorCode::InternalError, "internal_error"),
        ];
        for (code, expected) in cases {
            let value = serde_json::to_value(code).expect("code serialises");
            assert_eq!(value, serde_json::json!(expected));
        }
    }

    #[test]
    fn validation_error_converts_with_violation_details() {
        let mut violations = Violations::new();
        violations.push("name", "must not be blank");
        let err = Error::from(violations.into_error());

        assert_eq!(err.code, ErrorCode::InvalidRequest);
        let details = err.details.expect("violation details");
        assert_eq!(details["violations"][0]["field"], "name");
    }

    #[test]
    fn repository_errors_map_to_identifier_codes() {
        let conflict = Error::from(RepositoryError::IdentifierConflict { id: 4 });
        assert_eq!(conflict.code, ErrorCode::IdentifierConflict);
        assert!(conflict.message.contains('4'));

        let missing = Error::from(RepositoryError::IdentifierNotFound { id: 9 });
        assert_eq!(missing.code, ErrorCode::IdentifierNotFound);
    }

    #[test]
    fn trace_id_is_absent_outside_request_scope() {
        let err = Error::internal("boom");
        assert!(err.trace_id.is_none());
    }
}
