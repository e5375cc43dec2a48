// src/infrastructure/repositories/sqlite_article.rs
use super::error::map_sqlx;
use crate::domain::article::query::escape_like;
use crate::domain::article::{
    Article, ArticleBody, ArticleContentUpdate, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleSummary, ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::viewer::Username;
use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author: String,
    category_id: i64,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            author: Username::new(row.author)?,
            category_id: CategoryId::new(row.category_id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            created_at: row.created_at,
            published_at: row.published_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    id: i64,
    author: String,
    category_slug: String,
    category_title: String,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    approved_comments: i64,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.id)?,
            author: row.author,
            category_slug: row.category_slug,
            category_title: row.category_title,
            title: row.title,
            body: row.body,
            created_at: row.created_at,
            published_at: row.published_at,
            approved_comments: row.approved_comments,
        })
    }
}

const ARTICLE_COLUMNS: &str = "id, author, category_id, title, body, created_at, published_at";

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author,
            category_id,
            title,
            body,
            created_at,
            published_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (author, category_id, title, body, created_at, published_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, author, category_id, title, body, created_at, published_at",
        )
        .bind(author.as_str())
        .bind(i64::from(category_id))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(created_at)
        .bind(published_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleContentUpdate) -> DomainResult<Article> {
        let ArticleContentUpdate {
            id,
            category_id,
            title,
            body,
        } = update;

        let maybe_row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET category_id = ?, title = ?, body = ?
             WHERE id = ?
             RETURNING id, author, category_id, title, body, created_at, published_at",
        )
        .bind(i64::from(category_id))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn set_published(
        &self,
        id: ArticleId,
        published_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let maybe_row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET published_at = ?
             WHERE id = ?
             RETURNING id, author, category_id, title, body, created_at, published_at",
        )
        .bind(published_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        // Comments go with the article via ON DELETE CASCADE, all inside
        // this one statement.
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl SqliteArticleReadRepository {
    /// SQL mirror of `ArticleFilter::matches`; the in-memory test double
    /// evaluates the domain predicate directly.
    fn apply_conditions<'a>(
        builder: &mut QueryBuilder<'a, Sqlite>,
        filter: &'a ArticleFilter,
        now: DateTime<Utc>,
    ) {
        match filter {
            ArticleFilter::All => {
                builder.push(" WHERE a.published_at <= ");
                builder.push_bind(now);
            }
            ArticleFilter::Category(slug) => {
                builder.push(" WHERE a.published_at <= ");
                builder.push_bind(now);
                builder.push(" AND c.slug = ");
                builder.push_bind(slug.as_str());
            }
            ArticleFilter::Author(username) => {
                builder.push(" WHERE a.published_at <= ");
                builder.push_bind(now);
                builder.push(" AND a.author = ");
                builder.push_bind(username.as_str());
            }
            ArticleFilter::Day(day) => {
                let start = day.and_time(NaiveTime::MIN).and_utc();
                let end = start + chrono::Duration::days(1);
                builder.push(" WHERE a.published_at <= ");
                builder.push_bind(now);
                builder.push(" AND a.published_at >= ");
                builder.push_bind(start);
                builder.push(" AND a.published_at < ");
                builder.push_bind(end);
            }
            ArticleFilter::Search(term) => {
                let pattern = format!("%{}%", escape_like(term));
                builder.push(" WHERE a.published_at <= ");
                builder.push_bind(now);
                builder.push(" AND a.body LIKE ");
                builder.push_bind(pattern);
                builder.push(" ESCAPE '\\'");
            }
            ArticleFilter::Drafts(username) => {
                builder.push(" WHERE a.published_at IS NULL AND a.author = ");
                builder.push_bind(username.as_str());
            }
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Sqlite>, filter: &ArticleFilter) {
        if filter.is_drafts() {
            builder.push(" ORDER BY a.created_at DESC, a.title ASC");
        } else {
            builder.push(" ORDER BY a.published_at DESC, a.title ASC");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn count(&self, filter: &ArticleFilter, now: DateTime<Utc>) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT COUNT(*) FROM articles a JOIN categories c ON c.id = a.category_id",
        );
        Self::apply_conditions(&mut builder, filter, now);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(count.max(0) as u64)
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        now: DateTime<Utc>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT a.id, a.author, c.slug AS category_slug, c.title AS category_title, \
             a.title, a.body, a.created_at, a.published_at, \
             (SELECT COUNT(*) FROM comments m WHERE m.article_id = a.id AND m.approved = 1) \
             AS approved_comments \
             FROM articles a JOIN categories c ON c.id = a.category_id",
        );
        Self::apply_conditions(&mut builder, filter, now);
        Self::apply_ordering(&mut builder, filter);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset as i64);

        let rows = builder
            .build_query_as::<ArticleSummaryRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleSummary::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
