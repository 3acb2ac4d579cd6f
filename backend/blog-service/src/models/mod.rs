/// Data models for the blog service
///
/// Row-level structures mapped straight from the PostgreSQL schema:
/// - User: identity store record (id, email, username, credential hash)
/// - Post: blog post with an optional author reference
/// - Comment: comment belonging to exactly one post
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub creation_date: DateTime<Utc>,
    pub author_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub creation_date: DateTime<Utc>,
    pub post_id: i32,
}
