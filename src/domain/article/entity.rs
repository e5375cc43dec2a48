// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::category::CategoryId;
use crate::domain::viewer::Username;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author: Username,
    pub category_id: CategoryId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// A draft has no published timestamp at all; a future timestamp makes
    /// the article scheduled, which readers also cannot see yet.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.published_at.is_some_and(|at| at <= now)
    }

    pub fn is_draft(&self) -> bool {
        self.published_at.is_none()
    }

    /// Stamps the publish transition. Calling it again simply refreshes the
    /// timestamp; there is no "already published" state to report.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published_at = Some(now);
    }

    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        self.published_at
            .is_some_and(|at| now - Duration::days(1) <= at && at <= now)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author: Username,
    pub category_id: CategoryId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Full replacement of the editable fields. Authorship and publish state are
/// never touched by a content edit.
#[derive(Debug, Clone)]
pub struct ArticleContentUpdate {
    pub id: ArticleId,
    pub category_id: CategoryId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
}
