// src/infrastructure/repositories/sqlite_comment.rs
use super::error::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentAuthor, CommentBody, CommentId, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    approved: bool,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author: CommentAuthor::new(row.author)?,
            body: CommentBody::new(row.body)?,
            created_at: row.created_at,
            approved: row.approved,
        })
    }
}

const COMMENT_COLUMNS: &str = "id, article_id, author, body, created_at, approved";

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author,
            body,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, author, body, created_at, approved)
             VALUES (?, ?, ?, ?, 0)
             RETURNING id, article_id, author, body, created_at, approved",
        )
        .bind(i64::from(article_id))
        .bind(author.as_str())
        .bind(body.as_str())
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE article_id = ? AND created_at <= ?
             ORDER BY created_at ASC, id ASC"
        ))
        .bind(i64::from(article_id))
        .bind(now)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Comment::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn set_approved(&self, id: CommentId) -> DomainResult<Comment> {
        let maybe_row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET approved = 1
             WHERE id = ?
             RETURNING id, article_id, author, body, created_at, approved",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
