use crate::domain::article::entity::{Article, ArticleContentUpdate, NewArticle};
use crate::domain::article::query::{ArticleFilter, ArticleSummary};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleContentUpdate) -> DomainResult<Article>;
    async fn set_published(
        &self,
        id: ArticleId,
        published_at: DateTime<Utc>,
    ) -> DomainResult<Article>;
    /// Removes the article and, through referential integrity, every comment
    /// attached to it in the same atomic statement.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn count(&self, filter: &ArticleFilter, now: DateTime<Utc>) -> DomainResult<u64>;
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        now: DateTime<Utc>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<ArticleSummary>>;
}
