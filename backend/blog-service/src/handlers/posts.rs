/// Post handlers - HTTP endpoints for the post aggregate
///
/// The two read endpoints are anonymous; create/replace/delete require a
/// bearer token (the `AuthenticatedUser` guard).
use actix_web::{http::header, web, HttpResponse};
use sqlx::PgPool;

use crate::dto::PostDto;
use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use crate::services::PostService;
use crate::validators;

/// List all posts, nested comments and author included
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.list().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a single post by id
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<i32>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    match service.get(*post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Replace a post aggregate. The path id must match the payload id and the
/// post must already exist.
pub async fn replace_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<i32>,
    _user: AuthenticatedUser,
    payload: web::Json<PostDto>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();
    if post_id != payload.id {
        return Err(AppError::BadRequest(
            "path id does not match payload id".to_string(),
        ));
    }

    validators::validate_post(&payload).into_result()?;

    let service = PostService::new((**pool).clone());
    service.replace(post_id, &payload).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Create (or update, keyed by payload id) a post aggregate. Returns the
/// persisted resource with its id and a Location header.
pub async fn create_post(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    payload: web::Json<PostDto>,
) -> Result<HttpResponse> {
    validators::validate_post(&payload).into_result()?;

    let service = PostService::new((**pool).clone());
    let created = service.create(&payload, user.id).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/post/{}", created.id)))
        .json(created))
}

/// Delete a post. Posts that still have comments are rejected by the
/// storage layer (409).
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<i32>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    if service.delete(*post_id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().finish())
    }
}
