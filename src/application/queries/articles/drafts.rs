// src/application/queries/articles/drafts.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, Page},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, PageRequest},
        viewer::AuthenticatedViewer,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListDraftsQuery {
    pub page: Option<String>,
}

impl ArticleQueryService {
    /// The owner's unpublished articles, newest first. Scheduled articles
    /// are not drafts and appear in neither this listing nor the public
    /// ones.
    pub async fn list_drafts(
        &self,
        actor: &AuthenticatedViewer,
        query: ListDraftsQuery,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let filter = ArticleFilter::Drafts(actor.username.clone());
        self.fetch_page(&filter, PageRequest::parse(query.page.as_deref()))
            .await
    }
}
