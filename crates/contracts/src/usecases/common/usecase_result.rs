use crate::shared::graphql::GraphqlFailure;
use serde::{Deserialize, Serialize};

/// Result of a workflow route
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Error body of the local REST routes: `{ code, message }`.
///
/// `code` is either a WMS code (`FAPI_000007`) or one of the local codes
/// below, the frontend translates it through `errors:<code>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
}

impl UseCaseError {
    pub const VALIDATION: &'static str = "VALIDATION_ERROR";
    pub const UNAUTHORIZED: &'static str = "HTTP_401";
    pub const UPSTREAM: &'static str = "HTTP_502";
    pub const INTERNAL: &'static str = "INTERNAL_ERROR";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(Self::VALIDATION, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(Self::UNAUTHORIZED, message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(Self::UPSTREAM, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Self::INTERNAL, message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for UseCaseError {}

impl From<GraphqlFailure> for UseCaseError {
    fn from(failure: GraphqlFailure) -> Self {
        match failure.code {
            Some(code) => UseCaseError::new(code, failure.message),
            None => UseCaseError::upstream(failure.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_wms_code() {
        let err: UseCaseError = GraphqlFailure::with_code("FAPI_000006", "no stock").into();
        assert_eq!(err, UseCaseError::new("FAPI_000006", "no stock"));

        let err: UseCaseError = GraphqlFailure::new("connection refused").into();
        assert_eq!(err.code, UseCaseError::UPSTREAM);
        assert_eq!(err.to_string(), "[HTTP_502] connection refused");
    }
}
