use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use super::extractor::BearerToken;
use super::jwt;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

/// Middleware that requires a valid WMS access token.
///
/// Inserts the claims and the raw token into the request extensions, the
/// workflow handlers forward the token to the WMS API.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(jwt::bearer_token)
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".into()))?
        .to_string();

    let claims = jwt::validate_token(&token, state.jwt_secret())
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    req.extensions_mut().insert(claims);
    req.extensions_mut().insert(BearerToken(token));

    Ok(next.run(req).await)
}
