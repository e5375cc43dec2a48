// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, Page},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, PAGE_SIZE, PageRequest},
        category::CategorySlug,
        viewer::Username,
    },
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub page: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListByCategoryQuery {
    pub slug: String,
    pub page: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListByAuthorQuery {
    pub username: String,
    pub page: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListByDayQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub page: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        self.fetch_page(
            &ArticleFilter::All,
            PageRequest::parse(query.page.as_deref()),
        )
        .await
    }

    pub async fn list_by_category(
        &self,
        query: ListByCategoryQuery,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let filter = ArticleFilter::Category(CategorySlug::new(query.slug)?);
        self.fetch_page(&filter, PageRequest::parse(query.page.as_deref()))
            .await
    }

    pub async fn list_by_author(
        &self,
        query: ListByAuthorQuery,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let filter = ArticleFilter::Author(Username::new(query.username)?);
        self.fetch_page(&filter, PageRequest::parse(query.page.as_deref()))
            .await
    }

    /// Articles published on one calendar day. An impossible date is an
    /// empty result, not an error.
    pub async fn list_by_day(
        &self,
        query: ListByDayQuery,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let Some(day) = NaiveDate::from_ymd_opt(query.year, query.month, query.day) else {
            return Ok(Page::empty(PAGE_SIZE));
        };
        self.fetch_page(
            &ArticleFilter::Day(day),
            PageRequest::parse(query.page.as_deref()),
        )
        .await
    }
}
