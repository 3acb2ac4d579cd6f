/// Authentication service - registration and credential verification
use sqlx::PgPool;

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::User;
use crate::security::{jwt, password};

pub struct AuthService {
    pool: PgPool,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_secret: String) -> Self {
        Self { pool, jwt_secret }
    }

    /// Create a user with a hashed credential. Duplicate emails surface as
    /// a field-level validation error.
    pub async fn register(&self, email: &str, username: &str, password: &str) -> Result<User> {
        let password_hash = password::hash_password(password)?;

        let user = user_repo::create_user(&self.pool, email, username, &password_hash).await?;

        tracing::info!("user registered: {}", user.email);
        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email is NotFound, a wrong password is Unauthorized; the two
    /// are distinct on purpose (404 vs 401) to match the API contract.
    pub async fn login(&self, email: &str, pass: &str) -> Result<(User, String)> {
        let user = user_repo::find_user_by_email(&self.pool, email)
            .await?
            .ok_or(AppError::NotFound)?;

        password::verify_password(pass, &user.password_hash)?;

        let token = jwt::create_token(&user, &self.jwt_secret)?;

        tracing::info!("user logged in: {}", user.email);
        Ok((user, token))
    }
}
