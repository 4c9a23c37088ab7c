use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::graphql::GraphqlFailure;
use contracts::usecases::common::UseCaseError;
use thiserror::Error;

/// Ошибки локальных API роутов
///
/// Сериализуются как `{ code, message }`, фронтенд переводит `code`
/// через пространство `errors`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// WMS отклонил операцию (код ошибки GraphQL или неуспешная функция)
    #[error("[{code}] {message}")]
    Rejected { code: String, message: String },

    #[error("WMS API error: {0}")]
    Upstream(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> UseCaseError {
        match self {
            ApiError::Validation(message) => UseCaseError::validation(message.clone()),
            ApiError::Unauthorized(message) => UseCaseError::unauthorized(message.clone()),
            ApiError::Rejected { code, message } => UseCaseError::new(code.clone(), message.clone()),
            ApiError::Upstream(message) => UseCaseError::upstream(message.clone()),
            ApiError::Internal(err) => UseCaseError::internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<GraphqlFailure> for ApiError {
    fn from(failure: GraphqlFailure) -> Self {
        match failure.code {
            Some(code) => ApiError::Rejected {
                code,
                message: failure.message,
            },
            None => ApiError::Upstream(failure.message),
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        match err.code.as_str() {
            UseCaseError::VALIDATION => ApiError::Validation(err.message),
            UseCaseError::UNAUTHORIZED => ApiError::Unauthorized(err.message),
            UseCaseError::UPSTREAM => ApiError::Upstream(err.message),
            UseCaseError::INTERNAL => ApiError::Internal(anyhow::anyhow!(err.message)),
            _ => ApiError::Rejected {
                code: err.code,
                message: err.message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_rejected_is_422_with_code() {
        let response = ApiError::Rejected {
            code: "FAPI_000007".into(),
            message: "wrong status".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: UseCaseError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, UseCaseError::new("FAPI_000007", "wrong status"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthorized("x".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Upstream("x".into()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Unauthorized("x".into()).body().code, "HTTP_401");

        let internal: ApiError = anyhow::anyhow!("disk full").into();
        assert_eq!(internal.body(), UseCaseError::internal("disk full"));
    }

    #[test]
    fn test_conversions() {
        let err: ApiError = GraphqlFailure::new("timeout").into();
        assert!(matches!(err, ApiError::Upstream(_)));

        let err: ApiError = GraphqlFailure::with_code("FAPI_000002", "forbidden").into();
        assert!(matches!(err, ApiError::Rejected { ref code, .. } if code == "FAPI_000002"));

        let err: ApiError = UseCaseError::validation("loadId is required").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
