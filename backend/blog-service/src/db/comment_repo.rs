use sqlx::{PgConnection, PgPool};

use crate::dto::CommentDto;
use crate::error::Result;
use crate::models::Comment;

/// Get all comments for a post, oldest first
pub async fn find_comments_by_post(pool: &PgPool, post_id: i32) -> Result<Vec<Comment>> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, creation_date, post_id
        FROM comments
        WHERE post_id = $1
        ORDER BY creation_date ASC, id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Get all comments for a set of posts (listing assembly), oldest first
pub async fn find_comments_by_posts(pool: &PgPool, post_ids: &[i32]) -> Result<Vec<Comment>> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, creation_date, post_id
        FROM comments
        WHERE post_id = ANY($1)
        ORDER BY creation_date ASC, id ASC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Remove the comments of a post that are absent from a replace payload.
/// Runs inside the aggregate-upsert transaction.
pub async fn prune_comments(
    conn: &mut PgConnection,
    post_id: i32,
    keep_ids: &[i32],
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM comments
        WHERE post_id = $1 AND id <> ALL($2)
        "#,
    )
    .bind(post_id)
    .bind(keep_ids)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

/// Insert-or-update a single comment keyed by its id. Ids the post does not
/// own fall through to an insert with a generated id.
pub async fn upsert_comment(
    conn: &mut PgConnection,
    post_id: i32,
    comment: &CommentDto,
) -> Result<Comment> {
    if comment.id > 0 {
        let updated = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET content = $1
            WHERE id = $2 AND post_id = $3
            RETURNING id, content, creation_date, post_id
            "#,
        )
        .bind(&comment.content)
        .bind(comment.id)
        .bind(post_id)
        .fetch_optional(&mut *conn)
        .await?;

        if let Some(existing) = updated {
            return Ok(existing);
        }
    }

    let inserted = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, post_id)
        VALUES ($1, $2)
        RETURNING id, content, creation_date, post_id
        "#,
    )
    .bind(&comment.content)
    .bind(post_id)
    .fetch_one(conn)
    .await?;

    Ok(inserted)
}
