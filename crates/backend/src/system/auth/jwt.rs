use anyhow::{Context, Result};
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Validate an access token issued by the WMS API and extract its claims.
///
/// Tokens are HS256, signed with the secret shared with the WMS API.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// `Authorization: Bearer <token>` value
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use chrono::Utc;
    use contracts::system::permissions::{Mode, Permission};
    use jsonwebtoken::{encode, EncodingKey, Header};

    pub const SECRET: &str = "test-secret";

    pub fn claims(lifetime_secs: i64) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: "u1".into(),
            username: "jdoe".into(),
            full_name: Some("John Doe".into()),
            warehouse_id: Some("w1".into()),
            is_admin: false,
            permissions: vec![
                Permission::new("delivery", Mode::Read),
                Permission::new("delivery", Mode::Update),
            ],
            exp: (now + lifetime_secs) as usize,
            iat: now as usize,
        }
    }

    pub fn token(claims: &TokenClaims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_valid_token() {
        let token = token(&claims(3600), SECRET);
        let decoded = validate_token(&token, SECRET).unwrap();
        assert_eq!(decoded.username, "jdoe");
        assert_eq!(decoded.permissions.len(), 2);
    }

    #[test]
    fn test_wrong_secret_and_expired() {
        let token_value = token(&claims(3600), SECRET);
        assert!(validate_token(&token_value, "other").is_err());

        let expired = token(&claims(-3600), SECRET);
        assert!(validate_token(&expired, SECRET).is_err());
        assert!(validate_token("garbage", SECRET).is_err());
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Bearer  "), None);
        assert_eq!(bearer_token("Basic abc"), None);
    }
}
