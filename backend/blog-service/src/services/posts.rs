/// Post service - aggregate CRUD over the post/comment/user repositories
use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{comment_repo, post_repo, user_repo};
use crate::dto::PostDto;
use crate::error::{AppError, Result};
use crate::models::{Comment, User};

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All posts with nested comments and author, no pagination.
    pub async fn list(&self) -> Result<Vec<PostDto>> {
        let posts = post_repo::list_posts(&self.pool).await?;

        let post_ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        let comments = comment_repo::find_comments_by_posts(&self.pool, &post_ids).await?;

        let author_ids: Vec<Uuid> = {
            let mut ids: Vec<Uuid> = posts.iter().filter_map(|p| p.author_id).collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        };
        let authors: HashMap<Uuid, User> = user_repo::find_users_by_ids(&self.pool, &author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut comments_by_post: HashMap<i32, Vec<Comment>> = HashMap::new();
        for comment in comments {
            comments_by_post.entry(comment.post_id).or_default().push(comment);
        }

        let dtos = posts
            .iter()
            .map(|post| {
                let author = post.author_id.and_then(|id| authors.get(&id));
                let post_comments = comments_by_post.get(&post.id).map(Vec::as_slice).unwrap_or(&[]);
                PostDto::from_entity(post, author, post_comments)
            })
            .collect();

        Ok(dtos)
    }

    /// A single post with nested comments and author.
    pub async fn get(&self, post_id: i32) -> Result<Option<PostDto>> {
        let Some(post) = post_repo::find_post_by_id(&self.pool, post_id).await? else {
            return Ok(None);
        };

        let comments = comment_repo::find_comments_by_post(&self.pool, post.id).await?;
        let author = match post.author_id {
            Some(id) => user_repo::find_user_by_id(&self.pool, id).await?,
            None => None,
        };

        Ok(Some(PostDto::from_entity(&post, author.as_ref(), &comments)))
    }

    /// Replace an existing post aggregate. The post must pre-exist.
    pub async fn replace(&self, post_id: i32, dto: &PostDto) -> Result<()> {
        if !post_repo::post_exists(&self.pool, post_id).await? {
            return Err(AppError::NotFound);
        }

        post_repo::save_post(&self.pool, dto, None).await?;

        tracing::info!("post replaced: {}", post_id);
        Ok(())
    }

    /// Insert-or-update a post aggregate; the authenticated caller becomes
    /// the author of newly created rows. Returns the persisted aggregate.
    pub async fn create(&self, dto: &PostDto, author_id: Uuid) -> Result<PostDto> {
        let post = post_repo::save_post(&self.pool, dto, Some(author_id)).await?;

        tracing::info!("post saved: {}", post.id);

        self.get(post.id)
            .await?
            .ok_or_else(|| AppError::Internal("saved post disappeared".to_string()))
    }

    /// Delete a post row; false when no row matched.
    pub async fn delete(&self, post_id: i32) -> Result<bool> {
        let deleted = post_repo::delete_post(&self.pool, post_id).await?;

        if deleted {
            tracing::info!("post deleted: {}", post_id);
        }
        Ok(deleted)
    }
}
