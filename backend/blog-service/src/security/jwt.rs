/// Bearer-token issuance and validation using HS256 (HMAC with SHA-256)
///
/// Tokens carry the user's identity claims and expire 30 minutes after
/// issuance. Validation checks signature and expiry; issuer/audience are
/// not used. The account-existence check on authenticated requests lives in
/// the `middleware` guard, not here.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::User;

/// Fixed token lifetime, not configurable per call.
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username
    pub username: String,
    /// Email address
    pub email: String,
    /// Unique token id
    pub jti: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issue a signed token for a user. Pure function of the user record, the
/// configured secret, and the current time.
pub fn create_token(user: &User, secret: &str) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        email: user.email.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AppError::Internal("Failed to sign token".to_string()))
}

/// Validate signature and expiry, returning the decoded claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-at-least-32-bytes-long";

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            username: "testuser".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn token_is_compact_jwt() {
        let token = create_token(&sample_user(), SECRET).unwrap();
        assert!(!token.is_empty());
        // JWT tokens have 3 parts separated by dots
        assert_eq!(token.matches('.').count(), 2);
    }

    #[test]
    fn claims_round_trip() {
        let user = sample_user();
        let token = create_token(&user, SECRET).unwrap();

        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.email, user.email);
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn lifetime_is_thirty_minutes() {
        let token = create_token(&sample_user(), SECRET).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_MINUTES * 60);

        let now = Utc::now().timestamp();
        // Allow 1 second tolerance for execution time
        assert!(claims.iat >= now - 1);
        assert!(claims.iat <= now + 1);
    }

    #[test]
    fn each_token_gets_a_fresh_jti() {
        let user = sample_user();
        let first = create_token(&user, SECRET).unwrap();
        let second = create_token(&user, SECRET).unwrap();

        let a = decode_token(&first, SECRET).unwrap();
        let b = decode_token(&second, SECRET).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(&sample_user(), SECRET).unwrap();
        let err = decode_token(&token, "another-secret-entirely").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = create_token(&sample_user(), SECRET).unwrap();
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        parts[1] = parts[1].chars().rev().collect();
        let tampered = parts.join(".");
        assert!(decode_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let user = sample_user();
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode_token("not.a.token", SECRET).is_err());
        assert!(decode_token("", SECRET).is_err());
    }
}
