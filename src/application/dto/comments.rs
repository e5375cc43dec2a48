use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub approved: bool,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author: comment.author.into(),
            body: comment.body.into(),
            created_at: comment.created_at,
            approved: comment.approved,
        }
    }
}
