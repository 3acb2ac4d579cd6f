/// Authentication handlers
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::config::Config;
use crate::error::Result;
use crate::services::AuthService;
use crate::validators;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub email: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Register endpoint handler. No token is issued at registration; the user
/// logs in separately.
pub async fn register(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    validators::validate_registration(&payload.email, &payload.username, &payload.password)
        .into_result()?;

    let service = AuthService::new((**pool).clone(), config.auth.jwt_secret.clone());
    let user = service
        .register(&payload.email, &payload.username, &payload.password)
        .await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        email: user.email,
        username: user.username,
    }))
}

/// Login endpoint handler
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    validators::validate_login(&payload.email, &payload.password).into_result()?;

    let service = AuthService::new((**pool).clone(), config.auth.jwt_secret.clone());
    let (user, token) = service.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        username: user.username,
        email: user.email,
        token,
    }))
}
