use axum::extract::{Json, State};
use axum::http::{header, HeaderMap};
use contracts::shared::graphql::GraphqlRequest;
use serde_json::Value;

use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::system::auth::jwt::bearer_token;

/// POST /graphql
///
/// Forwards the request with the caller's token, the WMS API enforces
/// permissions itself. The envelope comes back untouched, GraphQL errors
/// included.
pub async fn proxy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<GraphqlRequest>,
) -> Result<Json<Value>, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token);

    tracing::debug!("graphql: {}", operation_name(&request.query));
    let envelope = state.gateway.post_graphql(&request, token).await?;
    Ok(Json(envelope))
}

/// `query Articles(...)` gives `Articles`, for logs
fn operation_name(query: &str) -> &str {
    let mut tokens = query.split_whitespace();
    match tokens.next() {
        Some("query") | Some("mutation") => tokens
            .next()
            .and_then(|name| name.split(['(', '{']).next())
            .filter(|name| !name.is_empty())
            .unwrap_or("anonymous"),
        _ => "anonymous",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_state;
    use crate::shared::wms::mock::MockGateway;
    use axum::http::HeaderValue;
    use serde_json::json;

    #[tokio::test]
    async fn test_proxy_forwards_token_and_errors() {
        let envelope = json!({ "data": null, "errors": [{ "message": "forbidden" }] });
        let (state, gateway) = test_state(MockGateway::answering(envelope.clone()));
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));

        let request = GraphqlRequest::new("query Articles { articles { count } }".into(), json!({}));
        let Json(answer) = proxy(State(state), headers, Json(request)).await.unwrap();
        assert_eq!(answer, envelope);
        assert_eq!(gateway.requests()[0].1.as_deref(), Some("tok"));
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(operation_name("query Articles($page: Int!) { x }"), "Articles");
        assert_eq!(operation_name("mutation CreateLoad{ x }"), "CreateLoad");
        assert_eq!(operation_name("{ articles { count } }"), "anonymous");
    }
}
