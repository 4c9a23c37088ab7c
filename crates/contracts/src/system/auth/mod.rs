use crate::system::permissions::Permission;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub warehouse_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub warehouse_id: Option<String>,
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// Claims of the access token issued by the WMS API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

impl From<TokenClaims> for UserInfo {
    fn from(claims: TokenClaims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            full_name: claims.full_name,
            warehouse_id: claims.warehouse_id,
            is_admin: claims.is_admin,
            permissions: claims.permissions,
        }
    }
}
