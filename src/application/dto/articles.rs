use crate::application::dto::comments::CommentDto;
use crate::domain::article::{Article, ArticleSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const EXCERPT_CHARS: usize = 400;

/// Listing row: the article joined with its category plus the tally of
/// approved comments, body shortened to an excerpt.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category_slug: String,
    pub category_title: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub approved_comments: i64,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            id: summary.id.into(),
            title: summary.title,
            excerpt: excerpt(&summary.body, EXCERPT_CHARS),
            author: summary.author,
            category_slug: summary.category_slug,
            category_title: summary.category_title,
            created_at: summary.created_at,
            published_at: summary.published_at,
            approved_comments: summary.approved_comments,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            body: article.body.into(),
            author: article.author.into(),
            category_id: article.category_id.into(),
            created_at: article.created_at,
            published_at: article.published_at,
        }
    }
}

/// Detail view: the article plus the comments currently listed under it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub category_slug: String,
    pub category_title: String,
    pub comments: Vec<CommentDto>,
}

/// Truncate to at most `limit` characters, ellipsis included, never
/// splitting a code point.
fn excerpt(body: &str, limit: usize) -> String {
    if body.chars().count() <= limit {
        return body.to_string();
    }
    let mut shortened: String = body.chars().take(limit.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
