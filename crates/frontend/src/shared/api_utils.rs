//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use crate::system::auth::storage;
use contracts::shared::graphql::GraphqlFailure;
use contracts::usecases::common::UseCaseError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/loads/print/label");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach the stored bearer token, if any
pub fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// POST a JSON body to a local route with the bearer token.
///
/// Non-2xx answers are turned into a failure carrying the `{ code, message }`
/// body of the route, or `HTTP_<status>` when the body is not one.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Response, GraphqlFailure> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| GraphqlFailure::new(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| GraphqlFailure::new(format!("Failed to send request: {}", e)))?;

    if response.ok() {
        return Ok(response);
    }
    Err(failure_from_response(response).await)
}

pub async fn failure_from_response(response: Response) -> GraphqlFailure {
    let status = response.status();
    match response.json::<UseCaseError>().await {
        Ok(error) => GraphqlFailure::with_code(error.code, error.message),
        Err(_) => GraphqlFailure::with_code(format!("HTTP_{}", status), format!("HTTP {}", status)),
    }
}
