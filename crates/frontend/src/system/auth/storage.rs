use crate::shared::storage;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    storage::set_item(ACCESS_TOKEN_KEY, token);
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    storage::get_item(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    storage::remove_item(ACCESS_TOKEN_KEY);
}
