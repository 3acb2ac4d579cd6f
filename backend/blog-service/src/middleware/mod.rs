/// HTTP request guards for the blog service
///
/// Bearer-token authentication is an extractor: protected handlers take an
/// `AuthenticatedUser` parameter, anonymous ones simply don't. Beyond
/// signature and expiry, the guard re-checks that the token's subject still
/// exists in the identity store, so a token never outlives its account.
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::db::user_repo;
use crate::error::AppError;
use crate::security::jwt;

/// Identity of the authenticated caller, extracted from a bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let config = req
                .app_data::<web::Data<Config>>()
                .ok_or_else(|| AppError::Internal("configuration missing".to_string()))?;
            let pool = req
                .app_data::<web::Data<PgPool>>()
                .ok_or_else(|| AppError::Internal("database pool missing".to_string()))?;

            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| {
                    AppError::Unauthorized("missing Authorization header".to_string())
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                AppError::Unauthorized("invalid Authorization scheme".to_string())
            })?;

            let claims = jwt::decode_token(token, &config.auth.jwt_secret)?;

            let user_id = Uuid::parse_str(&claims.sub)
                .map_err(|_| AppError::Unauthorized("invalid subject claim".to_string()))?;

            // Reject tokens whose account has been removed since issuance.
            let user = user_repo::find_user_by_id(pool.get_ref(), user_id)
                .await?
                .ok_or_else(|| AppError::Unauthorized("unknown user".to_string()))?;

            Ok(AuthenticatedUser {
                id: user.id,
                username: user.username,
                email: user.email,
            })
        })
    }
}
