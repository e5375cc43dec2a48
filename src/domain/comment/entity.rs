// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentAuthor, CommentBody, CommentId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: CommentAuthor,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub approved: bool,
}

impl Comment {
    /// Idempotent; approving an approved comment is a no-op.
    pub fn approve(&mut self) {
        self.approved = true;
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author: CommentAuthor,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}
