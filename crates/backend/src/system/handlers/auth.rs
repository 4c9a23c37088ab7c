use axum::extract::{Json, State};
use contracts::shared::graphql::{extract_field, GraphqlRequest, GraphqlResponse};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::jwt;

const LOGIN_MUTATION: &str = "mutation WarehouseLogin($username: String!, $password: String!, $warehouseId: String) { \
     warehouseLogin(username: $username, password: $password, warehouseId: $warehouseId) { accessToken } }";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WarehouseLogin {
    access_token: String,
}

/// Login handler, proxies `warehouseLogin` to the WMS API
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation("username and password are required".into()));
    }

    let graphql = GraphqlRequest::new(
        LOGIN_MUTATION.to_string(),
        json!({
            "username": request.username.trim(),
            "password": request.password,
            "warehouseId": request.warehouse_id,
        }),
    );
    let envelope = state.gateway.post_graphql(&graphql, None).await?;
    let response: GraphqlResponse<Value> = serde_json::from_value(envelope)
        .map_err(|e| ApiError::Upstream(format!("invalid login response: {}", e)))?;

    // Any error of the mutation is a refused login
    let data = response
        .into_result()
        .map_err(|failure| ApiError::Unauthorized(failure.message))?;
    let payload: WarehouseLogin = extract_field(data, "warehouseLogin")?;

    let claims = jwt::validate_token(&payload.access_token, state.jwt_secret())
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    tracing::info!("User '{}' logged in", claims.username);

    Ok(Json(LoginResponse {
        access_token: payload.access_token,
        user: claims.into(),
    }))
}

/// Get current user handler (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<UserInfo> {
    Json(claims.into())
}
