/// Transfer objects exposed at the API boundary
///
/// Wire shapes are camelCase JSON and distinct from the storage rows in
/// `models`; conversion is explicit, field by field. Incoming payloads may
/// omit `id`, `creationDate`, `user` and `comments` (create case), so those
/// fields default.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Comment, Post, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(default)]
    pub id: i32,
    pub content: String,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub post_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    #[serde(default)]
    pub comments: Vec<CommentDto>,
}

impl UserDto {
    pub fn from_entity(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl CommentDto {
    pub fn from_entity(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content.clone(),
            creation_date: Some(comment.creation_date),
            post_id: comment.post_id,
        }
    }
}

impl PostDto {
    /// Assemble the aggregate view of a post: the row itself, its author
    /// (when still present) and its comments.
    pub fn from_entity(post: &Post, author: Option<&User>, comments: &[Comment]) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            user: author.map(UserDto::from_entity),
            comments: comments.iter().map(CommentDto::from_entity).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            password_hash: "argon2-hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn sample_post(author_id: Option<Uuid>) -> Post {
        Post {
            id: 7,
            title: "First post".to_string(),
            content: "Hello".to_string(),
            creation_date: Utc::now(),
            author_id,
        }
    }

    #[test]
    fn assembles_post_with_author_and_comments() {
        let user = sample_user();
        let post = sample_post(Some(user.id));
        let comments = vec![
            Comment {
                id: 1,
                content: "nice".to_string(),
                creation_date: Utc::now(),
                post_id: post.id,
            },
            Comment {
                id: 2,
                content: "agreed".to_string(),
                creation_date: Utc::now(),
                post_id: post.id,
            },
        ];

        let dto = PostDto::from_entity(&post, Some(&user), &comments);

        assert_eq!(dto.id, 7);
        assert_eq!(dto.title, "First post");
        assert_eq!(dto.user.as_ref().unwrap().username, "alice");
        assert_eq!(dto.comments.len(), 2);
        assert_eq!(dto.comments[0].post_id, 7);
    }

    #[test]
    fn password_hash_never_reaches_the_wire() {
        let user = sample_user();
        let json = serde_json::to_string(&UserDto::from_entity(&user)).unwrap();
        assert!(!json.contains("argon2-hash"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let post = sample_post(None);
        let comment = Comment {
            id: 3,
            content: "hi".to_string(),
            creation_date: Utc::now(),
            post_id: post.id,
        };
        let dto = PostDto::from_entity(&post, None, std::slice::from_ref(&comment));
        let json = serde_json::to_value(&dto).unwrap();

        assert!(json.get("user").is_none());
        let first = &json["comments"][0];
        assert!(first.get("creationDate").is_some());
        assert_eq!(first["postId"], 7);
    }

    #[test]
    fn create_payload_defaults_optional_fields() {
        let dto: PostDto =
            serde_json::from_str(r#"{"title":"t","content":"c"}"#).unwrap();
        assert_eq!(dto.id, 0);
        assert!(dto.user.is_none());
        assert!(dto.comments.is_empty());

        let comment: CommentDto = serde_json::from_str(r#"{"content":"hello"}"#).unwrap();
        assert_eq!(comment.id, 0);
        assert!(comment.creation_date.is_none());
    }
}
