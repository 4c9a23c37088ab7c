use contracts::shared::graphql::GraphqlFailure;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, failure_from_response, post_json};

/// Login with username and password
pub async fn login(
    username: String,
    password: String,
    warehouse_id: Option<String>,
) -> Result<LoginResponse, GraphqlFailure> {
    let request = LoginRequest {
        username,
        password,
        warehouse_id,
    };

    post_json("/api/auth/login", &request)
        .await?
        .json::<LoginResponse>()
        .await
        .map_err(|e| GraphqlFailure::new(format!("Failed to parse response: {}", e)))
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, GraphqlFailure> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| GraphqlFailure::new(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(failure_from_response(response).await);
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| GraphqlFailure::new(format!("Failed to parse response: {}", e)))
}
