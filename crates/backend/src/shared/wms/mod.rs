//! Доступ к WMS GraphQL API

mod client;

pub use client::WmsClient;

use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::shared::graphql::{
    build_execute_function_mutation, execute_function_variables, extract_field, FunctionResult,
    GraphqlRequest, GraphqlResponse,
};
use serde_json::Value;

/// Трейт для доступа к WMS API
#[async_trait]
pub trait WmsGateway: Send + Sync {
    /// POST GraphQL запроса, ответ возвращается как есть
    /// (`data` и `errors` не разбираются)
    async fn post_graphql(&self, request: &GraphqlRequest, token: Option<&str>) -> Result<Value, ApiError>;

    /// Выполнить `executeFunction` и вернуть `output`. Ответ не `OK` даёт
    /// `ApiError::Rejected` с кодом ошибки функции, без кода `ApiError::Upstream`.
    async fn execute_function(
        &self,
        function_name: &str,
        input: Value,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let request = GraphqlRequest::new(
            build_execute_function_mutation(),
            execute_function_variables(function_name, input),
        );
        let envelope = self.post_graphql(&request, token).await?;
        let response: GraphqlResponse<Value> = serde_json::from_value(envelope)
            .map_err(|e| ApiError::Upstream(format!("invalid GraphQL response: {}", e)))?;
        let data = response.into_result()?;
        let result: FunctionResult = extract_field(data, "executeFunction")?;
        Ok(result.into_result()?)
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Шлюз с заготовленными ответами, запоминает запросы
    pub struct MockGateway {
        responses: Mutex<Vec<Result<Value, ApiError>>>,
        pub requests: Mutex<Vec<(GraphqlRequest, Option<String>)>>,
    }

    impl MockGateway {
        pub fn new(responses: Vec<Result<Value, ApiError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn answering(envelope: Value) -> Self {
            Self::new(vec![Ok(envelope)])
        }

        pub fn requests(&self) -> Vec<(GraphqlRequest, Option<String>)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WmsGateway for MockGateway {
        async fn post_graphql(&self, request: &GraphqlRequest, token: Option<&str>) -> Result<Value, ApiError> {
            self.requests
                .lock()
                .unwrap()
                .push((request.clone(), token.map(str::to_string)));
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(ApiError::Upstream("no canned response".into()));
            }
            responses.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockGateway;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_function_sends_event() {
        let gateway = MockGateway::answering(json!({
            "data": { "executeFunction": { "status": "OK", "output": { "volume": 2.5 } } }
        }));
        let output = gateway
            .execute_function("cubing_of_delivery", json!({ "deliveryId": "d1" }), Some("tok"))
            .await
            .unwrap();
        assert_eq!(output, json!({ "volume": 2.5 }));

        let requests = gateway.requests();
        let (request, token) = &requests[0];
        assert_eq!(token.as_deref(), Some("tok"));
        assert_eq!(request.variables["functionName"], "cubing_of_delivery");
        assert_eq!(request.variables["event"]["input"]["deliveryId"], "d1");
    }

    #[tokio::test]
    async fn test_failed_function_without_code_is_upstream() {
        let gateway = MockGateway::answering(json!({
            "data": { "executeFunction": { "status": "ERROR", "output": {} } }
        }));
        let err = gateway.execute_function("preparation_start", json!({}), None).await.unwrap_err();
        match err {
            ApiError::Upstream(message) => assert_eq!(message, "ERROR"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_function_is_rejected() {
        let gateway = MockGateway::answering(json!({
            "data": { "executeFunction": {
                "status": "ERROR",
                "output": { "code": "FAPI_000006", "message": "not enough stock" }
            } }
        }));
        let err = gateway.execute_function("preparation_start", json!({}), None).await.unwrap_err();
        match err {
            ApiError::Rejected { code, message } => {
                assert_eq!(code, "FAPI_000006");
                assert_eq!(message, "not enough stock");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_graphql_error_wins() {
        let gateway = MockGateway::answering(json!({
            "data": null,
            "errors": [{ "message": "forbidden", "extensions": { "code": "FAPI_000002" } }]
        }));
        let err = gateway.execute_function("cycle_count_start", json!({}), None).await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.body().code, "FAPI_000002");
    }
}
