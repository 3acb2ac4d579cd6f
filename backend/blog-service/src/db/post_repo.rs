use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{comment_repo, FOREIGN_KEY_VIOLATION};
use crate::dto::PostDto;
use crate::error::{AppError, Result};
use crate::models::Post;

/// Get all posts, oldest first
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, creation_date, author_id
        FROM posts
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: i32) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, creation_date, author_id
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Check whether a post row exists
pub async fn post_exists(pool: &PgPool, post_id: i32) -> Result<bool> {
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(post_id)
            .fetch_one(pool)
            .await?;

    Ok(exists.0)
}

/// Insert-or-update the full post aggregate in one transaction.
///
/// The post row is keyed by `dto.id` (zero or unknown ids insert a fresh
/// row); nested comments are upserted and comments missing from the payload
/// are removed (full-document replace). `author_id` is only written on
/// insert; the author of an existing post never changes.
pub async fn save_post(pool: &PgPool, dto: &PostDto, author_id: Option<Uuid>) -> Result<Post> {
    let mut tx = pool.begin().await?;

    let updated = if dto.id > 0 {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, content = $2
            WHERE id = $3
            RETURNING id, title, content, creation_date, author_id
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(dto.id)
        .fetch_optional(&mut *tx)
        .await?
    } else {
        None
    };

    let post = match updated {
        Some(post) => post,
        None => {
            sqlx::query_as::<_, Post>(
                r#"
                INSERT INTO posts (title, content, author_id)
                VALUES ($1, $2, $3)
                RETURNING id, title, content, creation_date, author_id
                "#,
            )
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(author_id)
            .fetch_one(&mut *tx)
            .await?
        }
    };

    let keep_ids: Vec<i32> = dto
        .comments
        .iter()
        .map(|c| c.id)
        .filter(|id| *id > 0)
        .collect();
    comment_repo::prune_comments(&mut *tx, post.id, &keep_ids).await?;

    for comment in &dto.comments {
        comment_repo::upsert_comment(&mut *tx, post.id, comment).await?;
    }

    tx.commit().await?;

    Ok(post)
}

/// Delete a post row. The comments FK is RESTRICT, so a post that still has
/// comments is rejected by the store; that surfaces as a Conflict.
pub async fn delete_post(pool: &PgPool, post_id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                AppError::Conflict("post still has comments".to_string())
            }
            _ => AppError::from(e),
        })?;

    Ok(result.rows_affected() > 0)
}
