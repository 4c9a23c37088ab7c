//! GraphQL client
//!
//! Every document goes through the backend proxy (`POST /graphql`), which
//! forwards the bearer token to the WMS API.

use crate::shared::api_utils::{api_url, failure_from_response, with_auth};
use contracts::shared::graphql::{
    build_execute_function_mutation, execute_function_variables, extract_field, FunctionResult,
    GraphqlFailure, GraphqlRequest, GraphqlResponse,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Send one document, returning `data` or the first GraphQL error
pub async fn post_graphql(request: &GraphqlRequest) -> Result<Value, GraphqlFailure> {
    let response = with_auth(Request::post(&api_url("/graphql")))
        .json(request)
        .map_err(|e| GraphqlFailure::new(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| GraphqlFailure::new(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(failure_from_response(response).await);
    }

    response
        .json::<GraphqlResponse<Value>>()
        .await
        .map_err(|e| GraphqlFailure::new(format!("Failed to parse response: {}", e)))?
        .into_result()
}

/// Send a document and decode `data.<endpoint>`
pub async fn query<T: DeserializeOwned>(
    query: String,
    variables: Value,
    endpoint: &str,
) -> Result<T, GraphqlFailure> {
    let data = post_graphql(&GraphqlRequest::new(query, variables)).await?;
    extract_field(data, endpoint)
}

/// `executeFunction(functionName, { input })`, failing when the status is not `OK`
pub async fn execute_function(function_name: &str, input: Value) -> Result<Value, GraphqlFailure> {
    log::debug!("executeFunction {}", function_name);
    let result: FunctionResult = query(
        build_execute_function_mutation(),
        execute_function_variables(function_name, input),
        "executeFunction",
    )
    .await?;
    result.into_result()
}
