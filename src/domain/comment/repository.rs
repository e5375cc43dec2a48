use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Comments visible under an article: created on or before `now`,
    /// oldest first.
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Comment>>;
    async fn set_approved(&self, id: CommentId) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
