// src/application/queries/articles/search.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, Page},
        error::ApplicationResult,
    },
    domain::article::{ArticleFilter, PAGE_SIZE, PageRequest},
};

#[derive(Debug, Clone, Default)]
pub struct SearchArticlesQuery {
    pub term: Option<String>,
    pub page: Option<String>,
}

impl ArticleQueryService {
    /// Case-insensitive substring search over article bodies. Searching for
    /// nothing means "nothing found", never "all articles".
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let term = query.term.unwrap_or_default();
        let term = term.trim();
        if term.is_empty() {
            return Ok(Page::empty(PAGE_SIZE));
        }

        self.fetch_page(
            &ArticleFilter::Search(term.to_string()),
            PageRequest::parse(query.page.as_deref()),
        )
        .await
    }
}
