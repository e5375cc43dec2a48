// src/domain/article/visibility.rs
use crate::domain::article::entity::Article;
use crate::domain::viewer::{AuthenticatedViewer, Viewer};
use chrono::{DateTime, Utc};

/// Outcome of the read policy. Hidden articles are reported exactly like
/// absent ones so a caller can never leak that someone else's draft exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    HiddenAsNotFound,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Published articles are public. Drafts and scheduled articles are visible
/// to their author alone.
pub fn article_visibility(article: &Article, viewer: &Viewer, now: DateTime<Utc>) -> Visibility {
    if article.is_published(now) {
        return Visibility::Visible;
    }

    match viewer.username() {
        Some(username) if *username == article.author => Visibility::Visible,
        _ => Visibility::HiddenAsNotFound,
    }
}

/// Edit, delete and publish are reserved for the article's author.
pub struct CanMutateArticleSpec<'a> {
    article: &'a Article,
    actor: &'a AuthenticatedViewer,
}

impl<'a> CanMutateArticleSpec<'a> {
    pub fn new(article: &'a Article, actor: &'a AuthenticatedViewer) -> Self {
        Self { article, actor }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article.author == self.actor.username
    }
}
